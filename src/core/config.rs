//! Player configuration, read from `~/.word-snake/config.json`.

use super::constants::{
    CELEBRATION_MS, GRID_SIZE, HINT_REVEAL_SECONDS, MAX_LIVE_TOKENS, SPAWN_INTERVAL_MS,
};
use super::difficulty::GameMode;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.json";

/// Tunables for a play session. Every field falls back to its default when
/// missing from the file, so partial configs are fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Cap on concurrently live letter tokens.
    pub max_tokens: usize,
    pub spawn_interval_ms: u64,
    pub hint_reveal_seconds: u32,
    /// Pause between completing a word and the next level starting.
    pub celebration_ms: u64,
    pub starting_level: u32,
    /// Ring the terminal bell for audio cues.
    pub bell: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Normal,
            max_tokens: MAX_LIVE_TOKENS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            hint_reveal_seconds: HINT_REVEAL_SECONDS,
            celebration_ms: CELEBRATION_MS,
            starting_level: 1,
            bell: false,
        }
    }
}

impl GameConfig {
    /// Load the config file, falling back to defaults if missing or invalid.
    pub fn load() -> Self {
        persistence::load_or_default::<GameConfig>(CONFIG_FILE).sanitized()
    }

    /// Clamp values that would stall or break the simulation.
    pub fn sanitized(mut self) -> Self {
        let cells = (GRID_SIZE as usize) * (GRID_SIZE as usize);
        self.max_tokens = self.max_tokens.clamp(1, cells - 1);
        self.spawn_interval_ms = self.spawn_interval_ms.max(1);
        self.celebration_ms = self.celebration_ms.max(1);
        self.starting_level = self.starting_level.max(1);
        self
    }
}
