//! Domain events produced by the session reducer.
//!
//! The reducer never plays sounds or draws confetti itself. It returns a list
//! of [`GameEvent`]s and the presentation layer maps them to log lines, cues
//! and progress records.

use crate::snake::types::Collision;

/// Score/level summary handed to the progress recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressReport {
    /// Points awarded by this event.
    pub score_delta: u32,
    /// Level the report refers to (the level just cleared).
    pub level: u32,
    /// Session score after applying `score_delta`.
    pub total_score: u32,
    /// True only when the whole clue sequence has been cleared.
    pub completed: bool,
}

/// Something that happened inside one reducer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    LevelStarted {
        level: u32,
    },
    LetterCollected {
        letter: char,
        correct: bool,
    },
    Undone {
        via_eraser: bool,
    },
    HintRevealed,
    Paused,
    Resumed,
    LevelCompleted {
        report: ProgressReport,
        answer: String,
        fact: String,
    },
    GameCompleted {
        report: ProgressReport,
    },
    GameOver {
        collision: Collision,
        level: u32,
        score: u32,
    },
    /// No free cell found within the attempt budget.
    SpawnSkipped,
}

/// Fire-and-forget audio/celebration cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Collect,
    Miss,
    Undo,
    LevelComplete,
    GameOver,
}

impl GameEvent {
    pub fn cue(&self) -> Option<Cue> {
        match self {
            GameEvent::LetterCollected { correct: true, .. } => Some(Cue::Collect),
            GameEvent::LetterCollected { correct: false, .. } => Some(Cue::Miss),
            GameEvent::Undone { .. } => Some(Cue::Undo),
            GameEvent::LevelCompleted { .. } | GameEvent::GameCompleted { .. } => {
                Some(Cue::LevelComplete)
            }
            GameEvent::GameOver { .. } => Some(Cue::GameOver),
            _ => None,
        }
    }

    /// The progress report carried by this event, if any.
    pub fn progress(&self) -> Option<&ProgressReport> {
        match self {
            GameEvent::LevelCompleted { report, .. } | GameEvent::GameCompleted { report } => {
                Some(report)
            }
            _ => None,
        }
    }
}
