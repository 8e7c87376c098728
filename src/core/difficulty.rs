//! Difficulty and speed model: maps a level to a tick interval and a label.

use super::constants::{MIN_SPEED_MS, SPEED_REDUCTION_PER_LEVEL_MS};
use serde::{Deserialize, Serialize};

/// Overall pace chosen by the player. Only the starting speed differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Relaxed,
    #[default]
    Normal,
    Swift,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Relaxed, GameMode::Normal, GameMode::Swift];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Parse a mode name as typed on the command line (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Relaxed => "Relaxed",
            Self::Normal => "Normal",
            Self::Swift => "Swift",
        }
    }

    /// Movement interval at level 1, in milliseconds.
    pub fn base_speed_ms(&self) -> u64 {
        match self {
            Self::Relaxed => 200,
            Self::Normal => 150,
            Self::Swift => 110,
        }
    }
}

/// Movement interval for `level` (1-based). Never below [`MIN_SPEED_MS`].
pub fn speed_ms(mode: GameMode, level: u32) -> u64 {
    let steps = u64::from(level.max(1) - 1);
    mode.base_speed_ms()
        .saturating_sub(SPEED_REDUCTION_PER_LEVEL_MS.saturating_mul(steps))
        .max(MIN_SPEED_MS)
}

/// Difficulty label attached to clues and shown next to the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl DifficultyTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    pub fn for_level(level: u32) -> Self {
        match level {
            0..=3 => Self::Beginner,
            4..=6 => Self::Intermediate,
            7..=9 => Self::Advanced,
            _ => Self::Expert,
        }
    }
}
