//! Core game logic for tilesnake
//!
//! Everything in here is pure simulation: no I/O, no rendering, no timers.
//! The engine is advanced one tick at a time by whoever owns the cadence.

pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::{Command, Direction};
pub use engine::{CollisionKind, Game, GamePhase, TickReport};
pub use grid::{Grid, Position};
pub use snake::Snake;
