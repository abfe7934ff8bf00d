//! Snake Arcade - the classic Snake game for the terminal
//!
//! This library provides:
//! - Core game logic and the drawable scene description (game module)
//! - Terminal rendering of scenes (render module)
//! - Key mapping from terminal events (input module)
//! - Session clock and high score (metrics module)
//! - The interactive terminal host (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
