use super::{
    action::{Direction, Key},
    config::{ConfigError, GameConfig},
    scene::{Palette, Rgb, Scene, Shape, TextItem, TextStyle},
    state::{CollisionType, GameState, Position, Snake},
};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;

/// What happened during one tick
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Whether the snake moved (false outside of play)
    pub moved: bool,
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// New tick interval the host timer must switch to
    pub new_interval: Option<Duration>,
    /// Collision that ended the game; the host timer must stop
    pub collision: Option<CollisionType>,
}

impl StepOutcome {
    pub fn is_game_over(&self) -> bool {
        self.collision.is_some()
    }
}

/// Tick delay in milliseconds once `score` apples have been eaten.
///
/// One millisecond faster per 10 apples, never more than 20% below `base_ms`.
pub fn speed_up_delay(base_ms: u64, score: u32) -> u64 {
    let max_speedup = base_ms / 5;
    let earned = u64::from(score / 10);
    base_ms
        .saturating_sub(earned)
        .max(base_ms - max_speedup)
}

/// The game engine that handles all game logic
///
/// The host drives it: `step` on every timer tick, `handle_key` on every key
/// press, `render` whenever it wants to paint.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
    snake: Snake,
    direction: Direction,
    apple: Position,
    score: u32,
    tick_interval: Duration,
    running: bool,
    show_mesh: bool,
    ticks: u64,
}

impl GameEngine {
    /// Create an engine from a checked configuration
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create an engine sitting on the menu screen
    ///
    /// `config` must pass [`GameConfig::validate`]; an empty play area or a
    /// zero unit size panics on the first apple. Use [`GameEngine::try_new`]
    /// for unchecked input.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            snake: Snake::stacked(config.start, config.initial_body_parts),
            apple: config.start,
            tick_interval: config.base_delay(),
            rng,
            state: GameState::Menu,
            direction: Direction::Right,
            score: 0,
            running: false,
            show_mesh: false,
            ticks: 0,
            config,
        }
    }

    /// Start a fresh game
    pub fn reset(&mut self) {
        self.snake = Snake::stacked(self.config.start, self.config.initial_body_parts);
        self.direction = Direction::Right;
        self.score = 0;
        self.ticks = 0;
        self.tick_interval = self.config.base_delay();
        self.running = true;
        self.state = GameState::Playing;
        self.spawn_apple();

        info!(
            "game started: {}x{} px, unit {} px, tick {:?}",
            self.config.screen_width,
            self.config.screen_height,
            self.config.unit_size,
            self.tick_interval
        );
    }

    /// React to a key press
    pub fn handle_key(&mut self, key: Key) {
        if key == Key::ToggleMesh {
            self.show_mesh = !self.show_mesh;
            debug!("grid mesh {}", if self.show_mesh { "on" } else { "off" });
            return;
        }

        match self.state {
            GameState::Menu => {
                if key == Key::Confirm {
                    self.reset();
                }
            }
            GameState::Playing => {
                // Prevent 180° turns
                if let Some(new_direction) = key.direction() {
                    if !self.direction.is_opposite(new_direction) {
                        self.direction = new_direction;
                    }
                }
            }
            GameState::GameOver => {}
        }
    }

    /// Advance the game by one tick
    pub fn step(&mut self) -> StepOutcome {
        if self.state != GameState::Playing || !self.running {
            return StepOutcome::default();
        }

        self.snake.advance(self.direction, self.config.unit_size);
        self.ticks += 1;

        let ate_apple = self.snake.head() == self.apple;
        if ate_apple {
            self.snake.grow();
            self.score += 1;
            self.spawn_apple();
        }

        let new_interval = self.check_speed();

        let collision = self.check_collision();
        if let Some(collision_type) = collision {
            self.running = false;
            self.state = GameState::GameOver;
            info!(
                "game over: {:?} at {:?}, score {} after {} ticks",
                collision_type,
                self.snake.head(),
                self.score,
                self.ticks
            );
        }

        StepOutcome {
            moved: true,
            ate_apple,
            new_interval,
            collision,
        }
    }

    /// Recompute the tick interval on every 10th apple
    fn check_speed(&mut self) -> Option<Duration> {
        if self.score == 0 || self.score % 10 != 0 {
            return None;
        }

        let delay = Duration::from_millis(speed_up_delay(self.config.base_delay_ms, self.score));
        if delay == self.tick_interval {
            return None;
        }

        info!(
            "speed up at score {}: tick {:?} -> {:?}",
            self.score, self.tick_interval, delay
        );
        self.tick_interval = delay;
        Some(delay)
    }

    /// Check the head against the body and the edges of the play area.
    ///
    /// The head may sit exactly on the far edge; only going past it counts.
    fn check_collision(&self) -> Option<CollisionType> {
        let head = self.snake.head();

        if self.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        if head.x < 0
            || head.x > self.config.screen_width
            || head.y < 0
            || head.y > self.config.screen_height
        {
            return Some(CollisionType::Wall);
        }

        None
    }

    /// Place the apple on a random grid cell, occupied or not
    fn spawn_apple(&mut self) {
        let unit = self.config.unit_size;
        let x = self.rng.gen_range(0..self.config.columns()) * unit;
        let y = self.rng.gen_range(0..self.config.rows()) * unit;
        self.apple = Position::new(x, y);
        debug!("apple spawned at {:?}", self.apple);
    }

    /// Move the apple somewhere specific
    #[doc(hidden)]
    pub fn place_apple(&mut self, pos: Position) {
        self.apple = pos;
    }

    /// Describe the current frame
    pub fn render(&self) -> Scene {
        let mut scene = Scene::new(
            self.config.screen_width,
            self.config.screen_height,
            self.config.unit_size,
        );

        match self.state {
            GameState::Menu => self.render_menu(&mut scene),
            GameState::Playing => self.render_playing(&mut scene),
            GameState::GameOver => self.render_game_over(&mut scene),
        }

        scene
    }

    fn render_menu(&self, scene: &mut Scene) {
        let height = self.config.screen_height;
        let title = TextStyle {
            size: 80,
            bold: true,
            italic: false,
        };

        scene
            .texts
            .push(TextItem::centered("Snake Game", i32::from(title.size), Rgb::GREEN, title));
        scene.texts.push(TextItem::centered(
            "Press Enter to Start",
            height / 2,
            Rgb::WHITE,
            TextStyle {
                size: 40,
                bold: true,
                italic: false,
            },
        ));
        scene.texts.push(TextItem::centered(
            "Use arrow keys to move",
            height / 2 + 50,
            Rgb::WHITE,
            TextStyle {
                size: 20,
                bold: false,
                italic: true,
            },
        ));
        scene.texts.push(TextItem::centered(
            "Author: VirosMs",
            height - 100,
            Rgb::WHITE,
            TextStyle {
                size: 20,
                bold: true,
                italic: true,
            },
        ));
    }

    fn render_playing(&self, scene: &mut Scene) {
        let unit = self.config.unit_size;

        if self.show_mesh {
            let (width, height) = (self.config.screen_width, self.config.screen_height);
            for i in 0..=self.config.columns() {
                scene
                    .shapes
                    .push(Shape::line((i * unit, 0), (i * unit, height), Rgb::DARK_GRAY));
            }
            for j in 0..=self.config.rows() {
                scene
                    .shapes
                    .push(Shape::line((0, j * unit), (width, j * unit), Rgb::DARK_GRAY));
            }
        }

        scene
            .shapes
            .push(Shape::oval(self.apple.x, self.apple.y, unit, Rgb::RED));

        let palette = Palette::for_score(self.score);
        let mut rng = rand::thread_rng();
        for (index, segment) in self.snake.segments().enumerate() {
            let color = palette.segment_color(index, &mut rng);
            scene.shapes.push(Shape::rect(segment.x, segment.y, unit, color));
        }

        scene.texts.push(self.score_text());
    }

    fn render_game_over(&self, scene: &mut Scene) {
        scene.texts.push(self.score_text());
        scene.texts.push(TextItem::centered(
            "Game Over",
            self.config.screen_height / 2,
            Rgb::RED,
            TextStyle {
                size: 75,
                bold: true,
                italic: false,
            },
        ));
    }

    fn score_text(&self) -> TextItem {
        let style = TextStyle {
            size: 40,
            bold: true,
            italic: false,
        };
        TextItem::centered(format!("Score: {}", self.score), i32::from(style.size), Rgb::RED, style)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Current snake length
    pub fn body_parts(&self) -> usize {
        self.snake.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn apple(&self) -> Position {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Interval the host timer should fire at
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Whether the host timer should be running
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn show_mesh(&self) -> bool {
        self.show_mesh
    }

    /// Ticks since the current game started
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
