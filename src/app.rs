//! Frontend state: the session plus everything the screen needs around it.

use crate::game_events::apply_game_events;
use rand::rngs::ThreadRng;
use word_snake::core::{Cue, GameEvent, MessageLog, Tone};
use word_snake::progress::SavedProgress;
use word_snake::session::apply_event;
use word_snake::{GameInput, GameSession, SessionEvent, SessionTimers};

pub struct App {
    pub session: GameSession,
    pub log: MessageLog,
    pub progress: SavedProgress,
    timers: SessionTimers,
    rng: ThreadRng,
    pending_cues: Vec<Cue>,
}

impl App {
    pub fn new(session: GameSession, progress: SavedProgress) -> Self {
        let mut log = MessageLog::default();
        log.push(
            format!(
                "Level {} of {}. Press Space to start.",
                session.level,
                session.deck.len()
            ),
            Tone::Neutral,
        );
        Self {
            session,
            log,
            progress,
            timers: SessionTimers::new(),
            rng: rand::thread_rng(),
            pending_cues: Vec::new(),
        }
    }

    pub fn handle_input(&mut self, input: GameInput) {
        let events = apply_event(&mut self.session, SessionEvent::Input(input), &mut self.rng);
        self.dispatch(&events);
    }

    /// Advance the session clock by one frame.
    pub fn tick(&mut self, dt_ms: u64) {
        let events = self.timers.advance(&mut self.session, dt_ms, &mut self.rng);
        self.dispatch(&events);
    }

    /// Cues raised since the last call.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending_cues)
    }

    pub fn save_progress(&self) {
        if let Err(e) = self.progress.save() {
            log::warn!("could not save progress: {}", e);
        }
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        if events.is_empty() {
            return;
        }
        let outcome = apply_game_events(&mut self.log, &mut self.progress, events);
        self.pending_cues.extend(outcome.cues);
        if outcome.progress_changed {
            self.save_progress();
        }
    }
}
