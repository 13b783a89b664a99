use crate::{
    choose_action, evaluate_candidate, AutoAction, AutoplayConfig, AutoplayError, AutoplayResult,
    FinalMetrics, RunStatus, StepRecord, SummaryStats,
};
use arcana_core::{Battle, EventBus, GameConfig, PlayResult, RoundOutcome};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Simulator {
    pub battle: Battle,
    pub events: EventBus,
}

impl Simulator {
    pub fn new(battle: Battle) -> Self {
        Self {
            battle,
            events: EventBus::default(),
        }
    }

    pub fn from_config(config: GameConfig, seed: u64) -> Result<Self, AutoplayError> {
        Ok(Self::new(Battle::new(config, seed)?))
    }

    pub fn metrics(&self) -> FinalMetrics {
        let enemy = self.battle.combat.enemy();
        FinalMetrics {
            round: self.battle.round(),
            enemy_index: self.battle.combat.roster.current,
            enemy_health: enemy.health,
            player_health: self.battle.combat.player.health,
            pentacles: self.battle.combat.player.pentacles,
        }
    }

    pub fn describe_action(&self, action: &AutoAction, config: &AutoplayConfig) -> Option<String> {
        match action {
            AutoAction::Play { indices } => {
                let candidate = evaluate_candidate(&self.battle, indices, config.weights)?;
                Some(format!(
                    "play cards: [{}]\nestimate: hand={} damage={} shield={} healing={} pentacles={} score={:.2}",
                    self.card_labels(indices),
                    candidate.hand.label(),
                    candidate.totals.damage,
                    candidate.totals.shield,
                    candidate.totals.healing,
                    candidate.totals.pentacles,
                    candidate.score
                ))
            }
            AutoAction::Discard { indices } => {
                Some(format!("discard cards: [{}]", self.card_labels(indices)))
            }
            AutoAction::NewRun => Some("start a new run".to_string()),
        }
    }

    fn card_labels(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .filter_map(|idx| self.battle.hand.get(*idx))
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Applies one action. Only plays produce a result.
    pub fn apply(&mut self, action: &AutoAction) -> Result<Option<PlayResult>, AutoplayError> {
        match action {
            AutoAction::Play { indices } => Ok(Some(self.battle.play(indices, &mut self.events)?)),
            AutoAction::Discard { indices } => {
                self.battle.discard(indices, &mut self.events)?;
                Ok(None)
            }
            AutoAction::NewRun => {
                self.battle.new_run(&mut self.events)?;
                Ok(None)
            }
        }
    }

    pub fn run(&mut self, config: &AutoplayConfig) -> Result<AutoplayResult, AutoplayError> {
        let mut steps = Vec::new();
        let mut summary = SummaryStats::default();
        let mut status = RunStatus::MaxSteps;

        for step in 0..config.max_steps {
            let action = choose_action(&self.battle, config);
            let before = self.metrics();
            let detail = self.describe_action(&action, config);
            self.events.drain().for_each(drop);
            let result = self.apply(&action)?;
            let event_count = self.events.len();
            let after = self.metrics();
            summary.steps += 1;

            let mut record = StepRecord {
                step,
                round_before: before.round,
                enemy_before: before.enemy_index,
                enemy_health_before: before.enemy_health,
                player_health_before: before.player_health,
                pentacles_before: before.pentacles,
                action: action.clone(),
                action_detail: detail,
                hand: None,
                damage: 0,
                counter_damage: 0,
                outcome: None,
                enemy_after: after.enemy_index,
                enemy_health_after: after.enemy_health,
                player_health_after: after.player_health,
                pentacles_after: after.pentacles,
                event_count,
            };

            match action {
                AutoAction::Play { .. } => summary.plays += 1,
                AutoAction::Discard { .. } => summary.discards += 1,
                AutoAction::NewRun => {}
            }

            let outcome = result.map(|play| {
                let damage = play.totals.damage
                    + play.specials.iter().map(|s| s.effect.damage).sum::<i64>();
                record.hand = Some(play.evaluation.hand);
                record.damage = damage;
                record.counter_damage = play.counter_damage;
                record.outcome = Some(play.outcome);
                summary.total_damage += damage;
                play.outcome
            });
            debug!(step, action = %action.short_label(), outcome = ?outcome, "autoplay step");
            steps.push(record);

            match outcome {
                Some(RoundOutcome::EnemyDefeated) => summary.enemies_defeated += 1,
                Some(RoundOutcome::RunWon) => {
                    summary.enemies_defeated += 1;
                    status = RunStatus::RunWon;
                    break;
                }
                Some(RoundOutcome::PlayerDefeated) => {
                    summary.defeats += 1;
                    if config.stop_on_defeat {
                        status = RunStatus::PlayerDefeated;
                        break;
                    }
                }
                Some(RoundOutcome::Continuing) | None => {}
            }
        }

        info!(
            seed = self.battle.seed(),
            status = ?status,
            steps = summary.steps,
            "autoplay finished"
        );
        Ok(AutoplayResult {
            seed: self.battle.seed(),
            status,
            final_metrics: self.metrics(),
            steps,
            summary,
        })
    }
}

/// Builds a battle from `config` with the autoplay seed and runs it to the end.
pub fn run_autoplay(
    config: GameConfig,
    autoplay: &AutoplayConfig,
) -> Result<AutoplayResult, AutoplayError> {
    let mut simulator = Simulator::from_config(config, autoplay.seed)?;
    simulator.run(autoplay)
}
