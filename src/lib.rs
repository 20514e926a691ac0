//! tilesnake - a tick-driven grid snake game
//!
//! This library provides:
//! - Core game simulation (game module): snake, food, collision, state machine
//! - TUI rendering (render module)
//! - Keyboard input mapping (input module)
//! - In-memory session metrics (metrics module)
//! - Execution modes (modes module)
//!
//! The game module has no I/O or rendering dependencies and can be driven
//! programmatically; apart from food placement every tick is deterministic.

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
