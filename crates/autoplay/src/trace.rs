use crate::{AutoAction, AutoplayError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunStatus {
    Won,
    Lost,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: u32,
    pub action: AutoAction,
    pub event_count: usize,
}

/// One finished game: its seed, the outcome, and how many actions the
/// engine applied before halting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub status: RunStatus,
    pub iterations: u32,
    #[serde(default)]
    pub steps: Vec<StepRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SummaryStats {
    pub games: u32,
    pub wins: u32,
    pub total_iterations: u64,
    pub wall_time_ms: u64,
}

impl SummaryStats {
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub summary: SummaryStats,
    pub games: Vec<GameRecord>,
}

impl BatchResult {
    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!(
                "games: {} wins: {} win_rate: {:.4}",
                self.summary.games,
                self.summary.wins,
                self.summary.win_rate()
            ),
            format!(
                "iterations: {} wall_ms: {}",
                self.summary.total_iterations, self.summary.wall_time_ms
            ),
            String::new(),
        ];
        for (idx, game) in self.games.iter().enumerate() {
            lines.push(format!(
                "game {:>4} | seed {:>20} | {:<4} | {} iterations",
                idx,
                game.seed,
                status_label(game.status),
                game.iterations
            ));
            for step in &game.steps {
                lines.push(format!(
                    "  step {:>4} | {} | events {}",
                    step.step,
                    step.action.short_label(),
                    step.event_count
                ));
            }
        }
        lines.join("\n")
    }
}

fn status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Won => "won",
        RunStatus::Lost => "lost",
    }
}

pub fn write_json(path: &Path, result: &BatchResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(result)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, result: &BatchResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_text_report())?;
    Ok(())
}
