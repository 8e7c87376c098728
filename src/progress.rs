//! Progress recording: best score, levels reached, and where to resume.

use crate::core::events::ProgressReport;
use crate::utils::persistence;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io;

pub const PROGRESS_FILE: &str = "progress.json";

/// Receives score/level reports as levels and games are completed.
pub trait ProgressRecorder {
    fn record(&mut self, report: &ProgressReport);
}

/// Level and score to pick up from on the next launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumePoint {
    pub level: u32,
    pub score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedProgress {
    pub best_score: u32,
    pub highest_level: u32,
    pub levels_cleared: u32,
    pub games_completed: u32,
    pub resume: Option<ResumePoint>,
    /// Unix timestamp of the last recorded report.
    pub last_played: Option<i64>,
}

impl SavedProgress {
    pub fn load() -> Self {
        persistence::load_or_default(PROGRESS_FILE)
    }

    pub fn save(&self) -> io::Result<()> {
        persistence::save(PROGRESS_FILE, self)
    }

    /// A crashed run starts over from the beginning next time.
    pub fn record_game_over(&mut self, score: u32) {
        self.best_score = self.best_score.max(score);
        self.resume = None;
        self.last_played = Some(Utc::now().timestamp());
    }
}

impl ProgressRecorder for SavedProgress {
    fn record(&mut self, report: &ProgressReport) {
        self.best_score = self.best_score.max(report.total_score);
        self.highest_level = self.highest_level.max(report.level);
        self.last_played = Some(Utc::now().timestamp());

        if report.completed {
            self.games_completed += 1;
            self.resume = None;
        } else {
            self.levels_cleared += 1;
            self.resume = Some(ResumePoint {
                level: report.level + 1,
                score: report.total_score,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleared(level: u32, total_score: u32) -> ProgressReport {
        ProgressReport {
            score_delta: 200,
            level,
            total_score,
            completed: false,
        }
    }

    #[test]
    fn test_level_clear_sets_resume_point() {
        let mut progress = SavedProgress::default();
        progress.record(&cleared(1, 200));
        assert_eq!(
            progress.resume,
            Some(ResumePoint {
                level: 2,
                score: 200
            })
        );
        assert_eq!(progress.best_score, 200);
        assert_eq!(progress.highest_level, 1);
        assert_eq!(progress.levels_cleared, 1);
        assert!(progress.last_played.is_some());
    }

    #[test]
    fn test_game_complete_clears_resume() {
        let mut progress = SavedProgress::default();
        progress.record(&cleared(11, 2000));
        progress.record(&ProgressReport {
            score_delta: 0,
            level: 12,
            total_score: 2200,
            completed: true,
        });
        assert_eq!(progress.resume, None);
        assert_eq!(progress.games_completed, 1);
        assert_eq!(progress.best_score, 2200);
        assert_eq!(progress.highest_level, 12);
    }

    #[test]
    fn test_game_over_keeps_best_score() {
        let mut progress = SavedProgress {
            best_score: 900,
            ..SavedProgress::default()
        };
        progress.record(&cleared(2, 400));
        progress.record_game_over(400);
        assert_eq!(progress.best_score, 900);
        assert_eq!(progress.resume, None);
    }

    #[test]
    fn test_old_files_without_new_fields_load() {
        let progress: SavedProgress = serde_json::from_str(r#"{ "best_score": 42 }"#).unwrap();
        assert_eq!(progress.best_score, 42);
        assert_eq!(progress.resume, None);
    }
}
