pub mod config;
pub mod constants;
pub mod difficulty;
pub mod events;
pub mod message_log;

pub use config::GameConfig;
pub use difficulty::{speed_ms, DifficultyTier, GameMode};
pub use events::{Cue, GameEvent, ProgressReport};
pub use message_log::{LogEntry, MessageLog, Tone};
