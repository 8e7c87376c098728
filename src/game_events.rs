//! Maps [`GameEvent`]s to message log entries, cues and progress records.
//!
//! Binary-only: the reducer stays free of presentation concerns and this
//! module decides what the player sees and what gets written to disk.

use word_snake::core::{Cue, GameEvent, MessageLog, Tone};
use word_snake::progress::{ProgressRecorder, SavedProgress};
use word_snake::snake::Collision;

/// Side effects the caller still has to carry out.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub cues: Vec<Cue>,
    /// Progress changed and should be saved.
    pub progress_changed: bool,
}

pub fn apply_game_events(
    log: &mut MessageLog,
    progress: &mut SavedProgress,
    events: &[GameEvent],
) -> EventOutcome {
    let mut outcome = EventOutcome::default();

    for event in events {
        if let Some(cue) = event.cue() {
            outcome.cues.push(cue);
        }
        if let Some(report) = event.progress() {
            progress.record(report);
            outcome.progress_changed = true;
        }

        match event {
            GameEvent::GameStarted => {
                log.clear();
                log.push("Pick a direction to get moving.", Tone::Neutral);
            }
            GameEvent::LevelStarted { level } => {
                log.push(format!("Level {}: a new clue.", level), Tone::Neutral);
            }
            GameEvent::LetterCollected {
                letter,
                correct: true,
            } => {
                log.push(format!("Got {}.", letter), Tone::Good);
            }
            GameEvent::LetterCollected {
                letter,
                correct: false,
            } => {
                log.push(
                    format!("{} doesn't fit there. Backspace to undo.", letter),
                    Tone::Bad,
                );
            }
            GameEvent::Undone { via_eraser: true } => {
                log.push("Eraser! Last letter removed.", Tone::Neutral);
            }
            GameEvent::Undone { via_eraser: false } => {
                log.push("Last letter removed.", Tone::Neutral);
            }
            GameEvent::HintRevealed => log.push("Hint revealed.", Tone::Neutral),
            GameEvent::Paused => log.push("Paused.", Tone::Neutral),
            GameEvent::Resumed => log.push("Back to it.", Tone::Neutral),
            GameEvent::LevelCompleted { report, answer, .. } => {
                log.push(
                    format!("{}! +{} points", answer, report.score_delta),
                    Tone::Good,
                );
            }
            GameEvent::GameCompleted { report } => {
                log.push(
                    format!("Every word found! Final score {}.", report.total_score),
                    Tone::Good,
                );
            }
            GameEvent::GameOver {
                collision, score, ..
            } => {
                let what = match collision {
                    Collision::Wall => "Hit the wall",
                    Collision::SelfHit => "Ran into yourself",
                };
                log.push(format!("{}. Final score {}.", what, score), Tone::Bad);
                progress.record_game_over(*score);
                outcome.progress_changed = true;
            }
            GameEvent::SpawnSkipped => {}
        }
    }

    outcome
}
