//! Session reducer: movement, token collection, undo, level progression.
//!
//! Every state change goes through [`apply_event`]. Timers and key handling
//! live outside; they only feed [`SessionEvent`]s in and read the returned
//! [`GameEvent`]s.

use super::types::{GameSession, Phase};
use crate::core::constants::{LEVEL_BASE_POINTS, TIME_BONUS_PER_SECOND, TIME_BONUS_WINDOW_SECONDS};
use crate::core::events::{GameEvent, ProgressReport};
use crate::snake::grid;
use crate::snake::spawner::{self, SpawnContext};
use crate::snake::types::{Direction, TokenKind};
use rand::Rng;

/// UI-agnostic player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Steer(Direction),
    Undo,
    Start,
    TogglePause,
    Restart,
}

/// Everything that can drive the session forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Movement timer fired.
    MoveTick,
    /// Spawn timer fired.
    SpawnTick,
    /// One second of level time passed.
    ClockTick,
    /// Celebration delay after a finished word ran out.
    AdvanceLevel,
    Input(GameInput),
}

/// Apply one event and report what happened.
pub fn apply_event<R: Rng>(
    session: &mut GameSession,
    event: SessionEvent,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    match event {
        SessionEvent::MoveTick => step_snake(session, &mut events),
        SessionEvent::SpawnTick => spawn_token(session, rng, &mut events),
        SessionEvent::ClockTick => tick_clock(session, &mut events),
        SessionEvent::AdvanceLevel => advance_level(session, &mut events),
        SessionEvent::Input(input) => process_input(session, input, &mut events),
    }
    events
}

fn process_input(session: &mut GameSession, input: GameInput, events: &mut Vec<GameEvent>) {
    match input {
        GameInput::Start => {
            if !session.started && session.phase == Phase::Playing {
                session.started = true;
                events.push(GameEvent::GameStarted);
            }
        }
        GameInput::Restart => restart(session, events),
        GameInput::TogglePause => {
            if !session.started || session.phase != Phase::Playing {
                return;
            }
            session.paused = !session.paused;
            events.push(if session.paused {
                GameEvent::Paused
            } else {
                GameEvent::Resumed
            });
        }
        GameInput::Steer(direction) => {
            // Checked against the direction actually applied last step, so two
            // quick turns between steps can never fold the snake back on itself.
            if session.is_running() && direction.accepts(session.direction) {
                session.queued_direction = Some(direction);
            }
        }
        GameInput::Undo => {
            if session.is_running() {
                backspace(session, false, events);
            }
        }
    }
}

/// Remove the last collected letter and the snake's last segment.
///
/// Shared by the undo key and eraser tokens. No-op on an empty word.
pub fn backspace(session: &mut GameSession, via_eraser: bool, events: &mut Vec<GameEvent>) {
    if session.word.pop().is_some() {
        session.snake.drop_tail();
        events.push(GameEvent::Undone { via_eraser });
    }
}

/// Single movement step.
fn step_snake(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    if !session.is_running() {
        return;
    }
    let Some(direction) = session.heading() else {
        return;
    };
    session.direction = Some(direction);
    session.queued_direction = None;
    session.tick_count += 1;

    let step = grid::advance(&session.snake, direction);
    if let Some(collision) = step.collision {
        log::debug!(
            "level {}: {:?} collision at {:?}",
            session.level,
            collision,
            step.new_head
        );
        session.phase = Phase::GameOver {
            completed: false,
            collision: Some(collision),
        };
        events.push(GameEvent::GameOver {
            collision,
            level: session.level,
            score: session.score,
        });
        return;
    }

    session.snake.push_head(step.new_head);

    let eaten = session
        .tokens
        .iter()
        .position(|t| t.position == step.new_head)
        .map(|index| session.tokens.remove(index));

    match eaten.map(|token| token.kind) {
        Some(TokenKind::Letter { letter, .. }) => {
            let correct = session.word.next_needed() == Some(letter);
            if session.word.push(letter) {
                // Growth: keep the tail this step.
                events.push(GameEvent::LetterCollected { letter, correct });
                if session.word.is_complete() {
                    complete_level(session, events);
                }
            } else {
                session.snake.drop_tail();
            }
        }
        Some(TokenKind::Eraser) => {
            session.snake.drop_tail();
            backspace(session, true, events);
        }
        None => {
            session.snake.drop_tail();
        }
    }
}

fn spawn_token<R: Rng>(session: &mut GameSession, rng: &mut R, events: &mut Vec<GameEvent>) {
    if !session.can_spawn() {
        return;
    }
    let ctx = SpawnContext {
        snake: &session.snake,
        tokens: &session.tokens,
        next_letter: session.word.next_needed(),
        collected_len: session.word.len(),
        max_tokens: session.config.max_tokens,
    };
    match spawner::spawn(&ctx, rng) {
        Some(token) => session.tokens.push(token),
        None => {
            log::debug!("level {}: no free cell for a token", session.level);
            events.push(GameEvent::SpawnSkipped);
        }
    }
}

fn tick_clock(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    if !session.is_moving() {
        return;
    }
    session.elapsed_secs += 1;
    if !session.hint_visible && session.elapsed_secs >= session.config.hint_reveal_seconds {
        session.hint_visible = true;
        events.push(GameEvent::HintRevealed);
    }
}

/// Points for finishing a word after `elapsed_secs` on the level.
pub fn level_points(elapsed_secs: u32) -> u32 {
    LEVEL_BASE_POINTS
        + TIME_BONUS_WINDOW_SECONDS.saturating_sub(elapsed_secs) * TIME_BONUS_PER_SECOND
}

fn complete_level(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    let score_delta = level_points(session.elapsed_secs);
    session.score += score_delta;
    session.phase = Phase::LevelComplete;

    let (answer, fact) = session
        .current_clue()
        .map(|clue| (clue.answer.clone(), clue.fact.clone()))
        .unwrap_or_default();
    log::info!(
        "level {} cleared ({}) in {}s, +{} points",
        session.level,
        answer,
        session.elapsed_secs,
        score_delta
    );
    events.push(GameEvent::LevelCompleted {
        report: ProgressReport {
            score_delta,
            level: session.level,
            total_score: session.score,
            completed: false,
        },
        answer,
        fact,
    });
}

fn advance_level(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    if session.phase != Phase::LevelComplete {
        return;
    }

    if session.has_next_clue() {
        session.level += 1;
        session.reset_level();
        session.phase = Phase::Playing;
        events.push(GameEvent::LevelStarted {
            level: session.level,
        });
    } else {
        log::info!("clue sequence cleared with {} points", session.score);
        session.phase = Phase::GameOver {
            completed: true,
            collision: None,
        };
        events.push(GameEvent::GameCompleted {
            report: ProgressReport {
                score_delta: 0,
                level: session.level,
                total_score: session.score,
                completed: true,
            },
        });
    }
}

/// Throw the current run away and start again from the configured level.
fn restart(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    session.level = session
        .config
        .starting_level
        .clamp(1, session.deck.len().max(1) as u32);
    session.score = 0;
    session.paused = false;
    session.started = true;
    session.phase = Phase::Playing;
    session.reset_level();
    events.push(GameEvent::GameStarted);
    events.push(GameEvent::LevelStarted {
        level: session.level,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::snake::types::{Cell, Collision, LetterToken, Snake};
    use crate::words::ClueDeck;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0)
    }

    /// A started session heading right from the center.
    fn started_session() -> GameSession {
        let mut session = GameSession::new(GameConfig::default(), ClueDeck::builtin());
        session.started = true;
        session.direction = Some(Direction::Right);
        session
    }

    fn apply(session: &mut GameSession, event: SessionEvent) -> Vec<GameEvent> {
        apply_event(session, event, &mut rng())
    }

    fn steer(session: &mut GameSession, direction: Direction) {
        apply(session, SessionEvent::Input(GameInput::Steer(direction)));
    }

    /// Put a letter token directly ahead of the head.
    fn place_ahead(session: &mut GameSession, letter: char) {
        let ahead = session.snake.head().offset(session.heading().unwrap());
        session.tokens.push(LetterToken::letter(ahead, letter, false));
    }

    #[test]
    fn test_start_required_before_play() {
        let mut session = GameSession::new(GameConfig::default(), ClueDeck::builtin());
        steer(&mut session, Direction::Up);
        assert_eq!(session.heading(), None);

        let events = apply(&mut session, SessionEvent::Input(GameInput::Start));
        assert_eq!(events, vec![GameEvent::GameStarted]);
        steer(&mut session, Direction::Up);
        assert_eq!(session.heading(), Some(Direction::Up));
    }

    #[test]
    fn test_no_movement_without_direction() {
        let mut session = started_session();
        session.direction = None;
        apply(&mut session, SessionEvent::MoveTick);
        assert_eq!(session.snake.head(), Cell::center());
        assert_eq!(session.tick_count, 0);
    }

    #[test]
    fn test_plain_move_keeps_length() {
        let mut session = started_session();
        apply(&mut session, SessionEvent::MoveTick);
        assert_eq!(session.snake.head(), Cell::new(11, 10));
        assert_eq!(session.snake.len(), 1);
    }

    #[test]
    fn test_reversal_ignored() {
        let mut session = started_session();
        steer(&mut session, Direction::Left);
        assert_eq!(session.heading(), Some(Direction::Right));
        steer(&mut session, Direction::Down);
        assert_eq!(session.heading(), Some(Direction::Down));
        steer(&mut session, Direction::Up);
        assert_eq!(session.heading(), Some(Direction::Up));
    }

    #[test]
    fn test_two_quick_turns_cannot_reverse() {
        let mut session = started_session();
        steer(&mut session, Direction::Up);
        // Still committed to Right until the next step, so Left is refused.
        steer(&mut session, Direction::Left);
        assert_eq!(session.heading(), Some(Direction::Up));
        apply(&mut session, SessionEvent::MoveTick);
        assert_eq!(session.direction, Some(Direction::Up));
        assert_eq!(session.queued_direction, None);
    }

    #[test]
    fn test_steer_ignored_while_paused() {
        let mut session = started_session();
        apply(&mut session, SessionEvent::Input(GameInput::TogglePause));
        assert!(session.paused);
        steer(&mut session, Direction::Up);
        assert_eq!(session.heading(), Some(Direction::Right));
        apply(&mut session, SessionEvent::MoveTick);
        assert_eq!(session.snake.head(), Cell::center());
    }

    #[test]
    fn test_wrong_letter_grows_and_extends_word() {
        let mut session = started_session();
        place_ahead(&mut session, 'X');
        let events = apply(&mut session, SessionEvent::MoveTick);
        assert_eq!(
            events,
            vec![GameEvent::LetterCollected {
                letter: 'X',
                correct: false
            }]
        );
        assert_eq!(session.word.collected(), "X");
        assert_eq!(session.snake.len(), 2);
        assert!(session.tokens.is_empty());
    }

    #[test]
    fn test_undo_restores_length() {
        let mut session = started_session();
        place_ahead(&mut session, 'O');
        apply(&mut session, SessionEvent::MoveTick);
        place_ahead(&mut session, 'Q');
        apply(&mut session, SessionEvent::MoveTick);
        assert_eq!(session.snake.len(), 3);

        let events = apply(&mut session, SessionEvent::Input(GameInput::Undo));
        assert_eq!(events, vec![GameEvent::Undone { via_eraser: false }]);
        assert_eq!(session.word.collected(), "O");
        assert_eq!(session.snake.len(), 2);
    }

    #[test]
    fn test_undo_on_empty_word_is_silent() {
        let mut session = started_session();
        let events = apply(&mut session, SessionEvent::Input(GameInput::Undo));
        assert!(events.is_empty());
        assert_eq!(session.snake.len(), 1);
    }

    #[test]
    fn test_eraser_undoes_without_growth() {
        let mut session = started_session();
        place_ahead(&mut session, 'O');
        apply(&mut session, SessionEvent::MoveTick);
        place_ahead(&mut session, 'Z');
        apply(&mut session, SessionEvent::MoveTick);
        assert_eq!(session.snake.len(), 3);

        let ahead = session.snake.head().offset(Direction::Right);
        session.tokens.push(LetterToken::eraser(ahead));
        let events = apply(&mut session, SessionEvent::MoveTick);

        assert_eq!(events, vec![GameEvent::Undone { via_eraser: true }]);
        assert_eq!(session.word.collected(), "O");
        assert_eq!(session.snake.len(), 2);
        assert_eq!(session.snake.head(), ahead);
    }

    #[test]
    fn test_eraser_on_empty_word_is_plain_move() {
        let mut session = started_session();
        let ahead = session.snake.head().offset(Direction::Right);
        session.tokens.push(LetterToken::eraser(ahead));
        let events = apply(&mut session, SessionEvent::MoveTick);
        assert!(events.is_empty());
        assert_eq!(session.snake.len(), 1);
        assert!(session.tokens.is_empty());
    }

    #[test]
    fn test_full_word_refuses_extra_letters() {
        let mut session = started_session();
        for letter in ['O', 'W', 'X'] {
            place_ahead(&mut session, letter);
            apply(&mut session, SessionEvent::MoveTick);
        }
        assert_eq!(session.snake.len(), 4);
        place_ahead(&mut session, 'L');
        let events = apply(&mut session, SessionEvent::MoveTick);
        assert!(events.is_empty());
        assert_eq!(session.word.collected(), "OWX");
        assert_eq!(session.snake.len(), 4);
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut session = started_session();
        session.snake = Snake::new(Cell::new(19, 4));
        let events = apply(&mut session, SessionEvent::MoveTick);
        assert_eq!(
            events,
            vec![GameEvent::GameOver {
                collision: Collision::Wall,
                level: 1,
                score: 0
            }]
        );
        assert!(session.is_over());
        assert_eq!(session.snake.head(), Cell::new(19, 4));

        // Nothing moves after game over.
        apply(&mut session, SessionEvent::MoveTick);
        assert_eq!(session.snake.head(), Cell::new(19, 4));
    }

    #[test]
    fn test_self_collision_against_vacating_tail() {
        let mut session = started_session();
        session.snake = Snake::from_cells([
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(6, 6),
            Cell::new(5, 6),
        ])
        .unwrap();
        session.direction = Some(Direction::Down);
        apply(&mut session, SessionEvent::MoveTick);
        assert_eq!(
            session.phase,
            Phase::GameOver {
                completed: false,
                collision: Some(Collision::SelfHit)
            }
        );
    }

    #[test]
    fn test_owl_scores_and_advances() {
        let mut session = started_session();
        session.elapsed_secs = 10;
        for letter in ['O', 'W', 'L'] {
            place_ahead(&mut session, letter);
            apply(&mut session, SessionEvent::MoveTick);
        }
        assert_eq!(session.phase, Phase::LevelComplete);
        assert_eq!(session.score, 200);

        // Frozen during the celebration.
        let head = session.snake.head();
        apply(&mut session, SessionEvent::MoveTick);
        assert_eq!(session.snake.head(), head);

        let events = apply(&mut session, SessionEvent::AdvanceLevel);
        assert_eq!(events, vec![GameEvent::LevelStarted { level: 2 }]);
        assert_eq!(session.level, 2);
        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(session.snake.len(), 1);
        assert!(session.word.is_empty());
        assert_eq!(session.heading(), None);
        assert_eq!(session.elapsed_secs, 0);
    }

    #[test]
    fn test_level_points_bonus_floor() {
        assert_eq!(level_points(0), 220);
        assert_eq!(level_points(10), 200);
        assert_eq!(level_points(60), 100);
        assert_eq!(level_points(400), 100);
    }

    #[test]
    fn test_last_clue_completes_game() {
        let deck = ClueDeck::builtin();
        let last = deck.len() as u32;
        let mut session = GameSession::resume(GameConfig::default(), deck, last, 500);
        session.started = true;
        session.phase = Phase::LevelComplete;

        let events = apply(&mut session, SessionEvent::AdvanceLevel);
        assert_eq!(
            events,
            vec![GameEvent::GameCompleted {
                report: ProgressReport {
                    score_delta: 0,
                    level: last,
                    total_score: 500,
                    completed: true
                }
            }]
        );
        assert_eq!(
            session.phase,
            Phase::GameOver {
                completed: true,
                collision: None
            }
        );
    }

    #[test]
    fn test_advance_ignored_outside_celebration() {
        let mut session = started_session();
        assert!(apply(&mut session, SessionEvent::AdvanceLevel).is_empty());
        assert_eq!(session.level, 1);
    }

    #[test]
    fn test_hint_reveals_once() {
        let mut session = started_session();
        session.elapsed_secs = 28;
        assert!(apply(&mut session, SessionEvent::ClockTick).is_empty());
        assert_eq!(
            apply(&mut session, SessionEvent::ClockTick),
            vec![GameEvent::HintRevealed]
        );
        assert!(apply(&mut session, SessionEvent::ClockTick).is_empty());
        assert!(session.hint_visible);
        assert_eq!(session.elapsed_secs, 31);
    }

    #[test]
    fn test_clock_waits_for_first_direction() {
        let mut session = started_session();
        session.direction = None;
        apply(&mut session, SessionEvent::ClockTick);
        assert_eq!(session.elapsed_secs, 0);
    }

    #[test]
    fn test_spawn_respects_cap() {
        let mut session = started_session();
        session.config.max_tokens = 2;
        let mut rng = rng();
        for _ in 0..5 {
            apply_event(&mut session, SessionEvent::SpawnTick, &mut rng);
        }
        assert_eq!(session.tokens.len(), 2);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = started_session();
        session.level = 4;
        session.score = 900;
        session.phase = Phase::GameOver {
            completed: false,
            collision: Some(Collision::Wall),
        };
        let events = apply(&mut session, SessionEvent::Input(GameInput::Restart));
        assert_eq!(
            events,
            vec![GameEvent::GameStarted, GameEvent::LevelStarted { level: 1 }]
        );
        assert_eq!(session.level, 1);
        assert_eq!(session.score, 0);
        assert!(session.is_running());
    }

    #[test]
    fn test_pause_toggle_events() {
        let mut session = started_session();
        assert_eq!(
            apply(&mut session, SessionEvent::Input(GameInput::TogglePause)),
            vec![GameEvent::Paused]
        );
        assert_eq!(
            apply(&mut session, SessionEvent::Input(GameInput::TogglePause)),
            vec![GameEvent::Resumed]
        );
    }
}
