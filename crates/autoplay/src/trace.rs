use crate::{AutoAction, AutoplayError};
use arcana_core::{HandKind, RoundOutcome};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunStatus {
    RunWon,
    PlayerDefeated,
    MaxSteps,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: u32,
    pub round_before: u32,
    pub enemy_before: usize,
    pub enemy_health_before: i64,
    pub player_health_before: i64,
    pub pentacles_before: i64,
    pub action: AutoAction,
    #[serde(default)]
    pub action_detail: Option<String>,
    #[serde(default)]
    pub hand: Option<HandKind>,
    #[serde(default)]
    pub damage: i64,
    #[serde(default)]
    pub counter_damage: i64,
    pub outcome: Option<RoundOutcome>,
    pub enemy_after: usize,
    pub enemy_health_after: i64,
    pub player_health_after: i64,
    pub pentacles_after: i64,
    pub event_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalMetrics {
    pub round: u32,
    pub enemy_index: usize,
    pub enemy_health: i64,
    pub player_health: i64,
    pub pentacles: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    pub steps: u32,
    pub plays: u32,
    pub discards: u32,
    pub enemies_defeated: u32,
    pub defeats: u32,
    pub total_damage: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayResult {
    pub seed: u64,
    pub status: RunStatus,
    pub final_metrics: FinalMetrics,
    pub steps: Vec<StepRecord>,
    pub summary: SummaryStats,
}

impl AutoplayResult {
    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!("status: {}", run_status_label(self.status)),
            format!("seed: {}", self.seed),
            format!(
                "final: round={} enemy={} enemy_health={} player_health={} pentacles={}",
                self.final_metrics.round,
                self.final_metrics.enemy_index + 1,
                self.final_metrics.enemy_health,
                self.final_metrics.player_health,
                self.final_metrics.pentacles
            ),
            format!(
                "summary: steps={} plays={} discards={} enemies_defeated={} defeats={} damage={}",
                self.summary.steps,
                self.summary.plays,
                self.summary.discards,
                self.summary.enemies_defeated,
                self.summary.defeats,
                self.summary.total_damage
            ),
            String::new(),
            "steps:".to_string(),
        ];
        for step in &self.steps {
            lines.push(format!(
                "  step {:>4} | {}",
                step.step,
                step.action.short_label()
            ));
            lines.push(format!(
                "    before: round {} enemy {} hp {} player hp {} pentacles {}",
                step.round_before,
                step.enemy_before + 1,
                step.enemy_health_before,
                step.player_health_before,
                step.pentacles_before
            ));
            lines.push(format!(
                "     after: enemy {} hp {} player hp {} pentacles {}",
                step.enemy_after + 1,
                step.enemy_health_after,
                step.player_health_after,
                step.pentacles_after
            ));
            if let Some(hand) = step.hand {
                lines.push(format!(
                    "    hand: {} damage={} counter={}",
                    hand.label(),
                    step.damage,
                    step.counter_damage
                ));
            }
            if let Some(outcome) = step.outcome {
                lines.push(format!("    outcome: {outcome:?}"));
            }
            if let Some(detail) = step.action_detail.as_ref() {
                for row in detail.lines() {
                    lines.push(format!("    detail: {row}"));
                }
            }
            lines.push(format!("    events: {}", step.event_count));
        }
        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String, AutoplayError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn run_status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::RunWon => "RunWon",
        RunStatus::PlayerDefeated => "PlayerDefeated",
        RunStatus::MaxSteps => "MaxSteps",
    }
}

pub fn write_json(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_json()?)?;
    Ok(())
}

pub fn write_text(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_text_report())?;
    Ok(())
}
