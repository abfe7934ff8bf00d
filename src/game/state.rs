use std::collections::VecDeque;

use super::action::Direction;

/// A position in the play area, in pixels, aligned to the unit size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one unit in a direction
    pub fn stepped(&self, direction: Direction, unit: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * unit, dy * unit)
    }
}

/// The snake in the game
///
/// Besides the live segments the snake remembers the slot its tail vacated
/// on the last move. Growing turns that slot back into the tail, so the
/// tail stays in place for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: VecDeque<Position>,
    /// Position given up by the tail on the last move
    vacated: Position,
}

impl Snake {
    /// Create a snake with every segment stacked on `start`
    ///
    /// The segments unfold behind the head as it moves away.
    pub fn stacked(start: Position, length: usize) -> Self {
        Self {
            body: std::iter::repeat(start).take(length.max(1)).collect(),
            vacated: start,
        }
    }

    /// Create a snake from explicit segments, head first.
    /// Returns `None` when there is no head.
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        let vacated = *body.back()?;
        Some(Self { body, vacated })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Position the tail left behind on the last move
    pub fn vacated(&self) -> Position {
        self.vacated
    }

    /// Iterate over all segments, head first
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Iterate over segments excluding the head
    pub fn body_segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().skip(1).copied()
    }

    /// Shift every segment into the place of the one in front of it and
    /// advance the head one unit
    pub fn advance(&mut self, direction: Direction, unit: i32) {
        let new_head = self.head().stepped(direction, unit);
        if let Some(tail) = self.body.pop_back() {
            self.vacated = tail;
        }
        self.body.push_front(new_head);
    }

    /// Reclaim the vacated slot as the new tail
    pub fn grow(&mut self) {
        self.body.push_back(self.vacated);
    }

    /// Check whether `pos` hits the body behind the head.
    ///
    /// The vacated slot counts as body: the head may not move into the
    /// cell the tail just left.
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().any(|segment| segment == pos) || self.vacated == pos
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never true for a constructed snake)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Title screen waiting for Confirm
    Menu,
    /// Snake is moving
    Playing,
    /// Terminal screen showing the final score
    GameOver,
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the play area
    Wall,
    /// Head ran into the body
    SelfCollision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(50, 50);
        assert_eq!(pos.moved_by(25, 0), Position::new(75, 50));
        assert_eq!(pos.stepped(Direction::Left, 25), Position::new(25, 50));
        assert_eq!(pos.stepped(Direction::Down, 25), Position::new(50, 75));
        assert_eq!(pos.stepped(Direction::Up, 10), Position::new(50, 40));
    }

    #[test]
    fn test_stacked_snake_unfolds() {
        let mut snake = Snake::stacked(Position::new(0, 0), 3);
        assert_eq!(snake.len(), 3);
        assert!(snake.segments().all(|p| p == Position::new(0, 0)));

        snake.advance(Direction::Right, 25);
        snake.advance(Direction::Right, 25);
        let segments: Vec<_> = snake.segments().collect();
        assert_eq!(
            segments,
            vec![Position::new(50, 0), Position::new(25, 0), Position::new(0, 0)]
        );
        assert_eq!(snake.vacated(), Position::new(0, 0));

        snake.advance(Direction::Down, 25);
        assert_eq!(snake.head(), Position::new(50, 25));
        assert_eq!(snake.tail(), Position::new(25, 0));
        assert_eq!(snake.vacated(), Position::new(0, 0));
    }

    #[test]
    fn test_growth_freezes_tail() {
        let mut snake = Snake::from_segments([
            Position::new(50, 0),
            Position::new(25, 0),
            Position::new(0, 0),
        ])
        .unwrap();

        snake.advance(Direction::Right, 25);
        assert_eq!(snake.tail(), Position::new(25, 0));
        snake.grow();

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(75, 0));
        assert_eq!(snake.tail(), Position::new(0, 0));
    }

    #[test]
    fn test_snake_needs_a_head() {
        assert!(Snake::from_segments([]).is_none());
        let snake = Snake::from_segments([Position::new(25, 25)]).unwrap();
        assert_eq!(snake.head(), snake.tail());
        assert_eq!(snake.vacated(), Position::new(25, 25));
    }

    #[test]
    fn test_collision_detection() {
        let mut snake = Snake::from_segments([
            Position::new(50, 50),
            Position::new(25, 50),
            Position::new(0, 50),
        ])
        .unwrap();
        assert!(!snake.collides_with_body(Position::new(50, 50))); // head
        assert!(snake.collides_with_body(Position::new(25, 50))); // body
        assert!(!snake.collides_with_body(Position::new(200, 200))); // empty

        snake.advance(Direction::Right, 25);
        assert!(snake.collides_with_body(Position::new(0, 50))); // vacated slot
    }
}
