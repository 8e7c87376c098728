//! Timer driver: turns wall-clock deltas into reducer events.
//!
//! Four interval timers share one session: movement (`speed_ms(level)`),
//! spawn, the one-second level clock, and a one-shot celebration delay after a
//! finished word. Whenever level, pause, start, phase or the moving state
//! changes, all timers are rebuilt from zero, so a stale interval can never
//! fire into a new level or a paused game.

use super::logic::{apply_event, SessionEvent};
use super::types::{GameSession, Phase};
use crate::core::constants::{CLOCK_INTERVAL_MS, MAX_FRAME_MS};
use crate::core::events::GameEvent;
use rand::Rng;

/// Fixed-period timer driven by explicit elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    period_ms: u64,
    elapsed_ms: u64,
}

impl IntervalTimer {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Milliseconds until the next fire.
    pub fn remaining_ms(&self) -> u64 {
        self.period_ms - self.elapsed_ms
    }

    pub fn elapse(&mut self, ms: u64) {
        self.elapsed_ms = (self.elapsed_ms + ms).min(self.period_ms);
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Movement,
    Clock,
    Spawn,
    Celebration,
}

impl TimerKind {
    // Order breaks ties: a move resolves before a spawn due on the same ms.
    const ALL: [TimerKind; 4] = [
        TimerKind::Movement,
        TimerKind::Clock,
        TimerKind::Spawn,
        TimerKind::Celebration,
    ];

    fn event(self) -> SessionEvent {
        match self {
            TimerKind::Movement => SessionEvent::MoveTick,
            TimerKind::Clock => SessionEvent::ClockTick,
            TimerKind::Spawn => SessionEvent::SpawnTick,
            TimerKind::Celebration => SessionEvent::AdvanceLevel,
        }
    }
}

/// Session values the timers depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerKey {
    level: u32,
    started: bool,
    paused: bool,
    phase: Phase,
    moving: bool,
}

impl TimerKey {
    fn of(session: &GameSession) -> Self {
        Self {
            level: session.level,
            started: session.started,
            paused: session.paused,
            phase: session.phase,
            moving: session.is_moving(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionTimers {
    key: Option<TimerKey>,
    movement: IntervalTimer,
    clock: IntervalTimer,
    spawn: IntervalTimer,
    celebration: IntervalTimer,
}

impl Default for SessionTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTimers {
    pub fn new() -> Self {
        Self {
            key: None,
            movement: IntervalTimer::new(1),
            clock: IntervalTimer::new(CLOCK_INTERVAL_MS),
            spawn: IntervalTimer::new(1),
            celebration: IntervalTimer::new(1),
        }
    }

    /// Current movement period, after the last rebuild.
    pub fn movement_period_ms(&self) -> u64 {
        self.movement.period_ms()
    }

    /// Advance wall-clock time by `dt_ms` (clamped to [`MAX_FRAME_MS`]) and
    /// fire every timer that comes due, in time order.
    pub fn advance<R: Rng>(
        &mut self,
        session: &mut GameSession,
        dt_ms: u64,
        rng: &mut R,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut remaining = dt_ms.min(MAX_FRAME_MS);
        self.sync(session);

        loop {
            let next = TimerKind::ALL
                .into_iter()
                .filter(|&kind| Self::is_active(kind, session))
                .min_by_key(|&kind| self.timer(kind).remaining_ms());
            let Some(kind) = next else {
                break;
            };

            let wait = self.timer(kind).remaining_ms();
            if wait > remaining {
                self.elapse_active(session, remaining);
                break;
            }
            self.elapse_active(session, wait);
            remaining -= wait;
            self.timer_mut(kind).reset();

            events.extend(apply_event(session, kind.event(), rng));
            self.sync(session);
        }

        events
    }

    /// Rebuild all timers if anything they depend on changed.
    fn sync(&mut self, session: &GameSession) {
        let key = TimerKey::of(session);
        if self.key == Some(key) {
            return;
        }
        log::trace!("rebuilding timers for {:?}", key);
        self.key = Some(key);
        self.movement = IntervalTimer::new(session.speed_ms());
        self.clock = IntervalTimer::new(CLOCK_INTERVAL_MS);
        self.spawn = IntervalTimer::new(session.config.spawn_interval_ms);
        self.celebration = IntervalTimer::new(session.config.celebration_ms);
    }

    fn is_active(kind: TimerKind, session: &GameSession) -> bool {
        match kind {
            TimerKind::Movement | TimerKind::Clock => session.is_moving(),
            TimerKind::Spawn => session.can_spawn(),
            TimerKind::Celebration => session.phase == Phase::LevelComplete && !session.paused,
        }
    }

    fn elapse_active(&mut self, session: &GameSession, ms: u64) {
        for kind in TimerKind::ALL {
            if Self::is_active(kind, session) {
                self.timer_mut(kind).elapse(ms);
            }
        }
    }

    fn timer(&self, kind: TimerKind) -> &IntervalTimer {
        match kind {
            TimerKind::Movement => &self.movement,
            TimerKind::Clock => &self.clock,
            TimerKind::Spawn => &self.spawn,
            TimerKind::Celebration => &self.celebration,
        }
    }

    fn timer_mut(&mut self, kind: TimerKind) -> &mut IntervalTimer {
        match kind {
            TimerKind::Movement => &mut self.movement,
            TimerKind::Clock => &mut self.clock,
            TimerKind::Spawn => &mut self.spawn,
            TimerKind::Celebration => &mut self.celebration,
        }
    }
}
