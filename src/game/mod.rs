//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The host drives [`GameEngine`] with timer ticks and logical keys and paints the
//! [`Scene`] it describes.

pub mod action;
pub mod config;
pub mod engine;
pub mod scene;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Key};
pub use config::{ConfigError, GameConfig};
pub use engine::{speed_up_delay, GameEngine, StepOutcome};
pub use scene::{Palette, Rgb, Scene, Shape, ShapeKind, TextItem, TextStyle};
pub use state::{CollisionType, GameState, Position, Snake};
