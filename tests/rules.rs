use snake_arcade::game::{
    CollisionType, Direction, GameConfig, GameEngine, GameState, Key, Position, ShapeKind,
};
use std::time::Duration;

fn started(seed: u64) -> GameEngine {
    let mut engine = GameEngine::new(GameConfig::default().with_seed(seed));
    engine.handle_key(Key::Confirm);
    engine.place_apple(Position::new(575, 575));
    engine
}

/// Put the apple right in front of the head and take one step
fn eat(engine: &mut GameEngine, direction: Direction) {
    engine.handle_key(direction.into());
    let next = engine.snake().head().stepped(engine.direction(), 25);
    engine.place_apple(next);
    let outcome = engine.step();
    assert!(outcome.ate_apple);
    assert!(!outcome.is_game_over());
}

#[test]
fn straight_run_from_start_position() {
    let mut engine = started(11);
    let start = engine.config().start;

    for n in 1..=10 {
        assert!(!engine.step().is_game_over());
        assert_eq!(engine.snake().head(), Position::new(start.x + n * 25, start.y));
    }
    assert_eq!(engine.state(), GameState::Playing);
}

#[test]
fn length_grows_by_one_per_apple_and_never_shrinks() {
    let mut engine = GameEngine::new(GameConfig::default().with_seed(5));
    engine.handle_key(Key::Confirm);

    // Sweep the board in a serpentine so apples get eaten naturally
    let mut length = engine.body_parts();
    let mut ticks = 0;
    while engine.state() == GameState::Playing && ticks < 2000 {
        let head = engine.snake().head();
        match engine.direction() {
            Direction::Right if head.x >= 575 => engine.handle_key(Key::Down),
            Direction::Left if head.x <= 0 => engine.handle_key(Key::Down),
            Direction::Down if head.x >= 575 => engine.handle_key(Key::Left),
            Direction::Down => engine.handle_key(Key::Right),
            _ => {}
        }

        let score_before = engine.score();
        let outcome = engine.step();
        ticks += 1;

        let grown = engine.body_parts() - length;
        assert_eq!(grown, usize::from(outcome.ate_apple));
        assert_eq!(engine.score() - score_before, u32::from(outcome.ate_apple));
        length = engine.body_parts();
    }

    assert_eq!(engine.body_parts(), 6 + engine.score() as usize);
}

#[test]
fn direct_reversal_is_ignored() {
    let mut engine = started(2);
    let pairs = [
        (Key::Up, Key::Down),
        (Key::Left, Key::Right),
        (Key::Down, Key::Up),
        (Key::Right, Key::Left),
    ];

    engine.step();
    for (turn, reverse) in pairs {
        engine.handle_key(turn);
        let current = engine.direction();
        engine.handle_key(reverse);
        assert_eq!(engine.direction(), current);
    }
}

#[test]
fn tenth_apple_speeds_up_the_timer() {
    let mut engine = started(3);
    assert_eq!(engine.tick_interval(), Duration::from_millis(75));

    for _ in 0..10 {
        eat(&mut engine, Direction::Right);
    }

    assert_eq!(engine.score(), 10);
    assert_eq!(engine.tick_interval(), Duration::from_millis(74));
}

#[test]
fn leaving_the_play_area_ends_the_game() {
    let mut engine = started(4);
    engine.handle_key(Key::Down);

    // y may reach the bottom edge itself
    for _ in 0..24 {
        assert!(!engine.step().is_game_over());
    }
    assert_eq!(engine.snake().head(), Position::new(0, 600));

    let outcome = engine.step();
    assert_eq!(outcome.collision, Some(CollisionType::Wall));
    assert_eq!(engine.state(), GameState::GameOver);

    let head = engine.snake().head();
    assert!(!engine.step().moved);
    assert_eq!(engine.snake().head(), head);
}

#[test]
fn crossing_the_left_edge_ends_the_game() {
    let mut engine = started(9);
    engine.handle_key(Key::Down);
    engine.step();
    engine.handle_key(Key::Left);

    let outcome = engine.step();

    assert_eq!(outcome.collision, Some(CollisionType::Wall));
    assert_eq!(engine.snake().head(), Position::new(-25, 25));
    assert_eq!(engine.state(), GameState::GameOver);
    assert!(!engine.is_running());
}

#[test]
fn running_into_the_body_ends_the_game() {
    let mut engine = started(6);
    for _ in 0..6 {
        engine.step();
    }
    for key in [Key::Down, Key::Left, Key::Up] {
        engine.handle_key(key);
        if engine.step().is_game_over() {
            break;
        }
    }

    assert_eq!(engine.state(), GameState::GameOver);
    assert!(!engine.is_running());
}

#[test]
fn rainbow_tier_only_varies_colors() {
    let mut engine = started(8);
    for _ in 0..20 {
        eat(&mut engine, Direction::Right);
    }
    for _ in 0..10 {
        eat(&mut engine, Direction::Down);
    }
    assert_eq!(engine.score(), 30);

    let first = engine.render();
    let second = engine.render();

    assert_eq!(first.texts, second.texts);
    assert_eq!(first.shapes.len(), second.shapes.len());
    for (a, b) in first.shapes.iter().zip(&second.shapes) {
        assert_eq!((a.kind, a.x, a.y, a.width, a.height), (b.kind, b.x, b.y, b.width, b.height));
    }

    let head = first
        .shapes
        .iter()
        .find(|shape| shape.kind == ShapeKind::Rect)
        .unwrap();
    assert_eq!(head.color, snake_arcade::game::Rgb::MAGENTA);
}
