//! Game session state.
//!
//! One value holds everything the simulation needs: board, word, clue deck,
//! score and timing. The reducer in `logic.rs` is the only code that mutates
//! it during play.

use crate::core::config::GameConfig;
use crate::core::difficulty::{speed_ms, DifficultyTier};
use crate::snake::types::{Cell, Collision, Direction, LetterToken, Snake};
use crate::words::{Clue, ClueDeck, WordAssembly};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Collecting letters for the current clue.
    Playing,
    /// Word finished; movement and spawning frozen until the next level.
    LevelComplete,
    /// Terminal. `completed` distinguishes clearing every clue from a crash.
    GameOver {
        completed: bool,
        collision: Option<Collision>,
    },
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub deck: ClueDeck,

    pub level: u32,
    pub score: u32,
    /// Whole seconds spent on the current level.
    pub elapsed_secs: u32,
    pub started: bool,
    pub paused: bool,
    pub phase: Phase,
    pub hint_visible: bool,

    pub snake: Snake,
    pub tokens: Vec<LetterToken>,
    pub word: WordAssembly,
    /// Direction applied on the last movement step.
    pub direction: Option<Direction>,
    /// At most one turn waiting for the next movement step.
    pub queued_direction: Option<Direction>,

    /// Movement steps taken this level.
    pub tick_count: u64,
}

impl GameSession {
    /// New session at the configured starting level. Not started yet.
    pub fn new(config: GameConfig, deck: ClueDeck) -> Self {
        let level = config.starting_level;
        Self::resume(config, deck, level, 0)
    }

    /// Session that picks up at `level` with `score` already banked.
    pub fn resume(config: GameConfig, deck: ClueDeck, level: u32, score: u32) -> Self {
        let level = level.clamp(1, deck.len().max(1) as u32);
        let mut session = Self {
            config,
            deck,
            level,
            score,
            elapsed_secs: 0,
            started: false,
            paused: false,
            phase: Phase::Playing,
            hint_visible: false,
            snake: Snake::new(Cell::center()),
            tokens: Vec::new(),
            word: WordAssembly::new(Vec::new()),
            direction: None,
            queued_direction: None,
            tick_count: 0,
        };
        session.reset_level();
        session
    }

    /// Clear every level-scoped field for a fresh attempt at `self.level`.
    pub fn reset_level(&mut self) {
        let letters = self.current_clue().map(Clue::letters).unwrap_or_default();
        self.word = WordAssembly::new(letters);
        self.snake = Snake::new(Cell::center());
        self.tokens.clear();
        self.direction = None;
        self.queued_direction = None;
        self.elapsed_secs = 0;
        self.hint_visible = false;
        self.tick_count = 0;
    }

    pub fn current_clue(&self) -> Option<&Clue> {
        self.deck.get(self.level)
    }

    pub fn has_next_clue(&self) -> bool {
        self.deck.get(self.level + 1).is_some()
    }

    /// Where the snake will go on the next step: a queued turn wins over the
    /// current direction.
    pub fn heading(&self) -> Option<Direction> {
        self.queued_direction.or(self.direction)
    }

    /// Started, not paused, and collecting letters.
    pub fn is_running(&self) -> bool {
        self.started && !self.paused && self.phase == Phase::Playing
    }

    /// Running and already given a first direction. Movement and the level
    /// clock only advance in this state.
    pub fn is_moving(&self) -> bool {
        self.is_running() && self.heading().is_some()
    }

    /// Whether the spawn timer should be counting.
    pub fn can_spawn(&self) -> bool {
        self.is_moving() && self.tokens.len() < self.config.max_tokens && !self.word.is_complete()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn speed_ms(&self) -> u64 {
        speed_ms(self.config.mode, self.level)
    }

    pub fn tier(&self) -> DifficultyTier {
        self.current_clue()
            .map(|clue| clue.tier)
            .unwrap_or_else(|| DifficultyTier::for_level(self.level))
    }
}
