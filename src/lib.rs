//! Word Snake - a word-building snake game for vocabulary practice.
//!
//! The library holds the UI-agnostic engine: grid and collisions, token
//! spawning, word assembly, level progression and the timer driver. The
//! terminal frontend lives in the binary.

pub mod build_info;
pub mod core;
pub mod progress;
pub mod session;
pub mod snake;
pub mod utils;
pub mod words;

pub use crate::core::constants::GRID_SIZE;
pub use crate::core::{GameConfig, GameEvent, GameMode};
pub use session::{GameInput, GameSession, SessionEvent, SessionTimers};
