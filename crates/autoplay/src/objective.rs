use arcana_core::{EffectTotals, Enemy, Player};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObjectiveWeights {
    pub damage: f64,
    pub kill_bonus: f64,
    pub shield: f64,
    pub healing: f64,
    pub pentacles: f64,
    pub death_penalty: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            damage: 1.0,
            kill_bonus: 40.0,
            shield: 0.9,
            healing: 0.7,
            pentacles: 0.3,
            death_penalty: 200.0,
        }
    }
}

/// Projected state after a hand resolves and the enemy strikes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub enemy_health: i64,
    pub player_health: i64,
    pub kills: bool,
    pub dies: bool,
}

pub fn project(player: &Player, enemy: &Enemy, totals: &EffectTotals) -> Projection {
    let enemy_health = enemy.health - totals.damage;
    let healed = (player.health + totals.healing).min(player.max_health);
    let incoming = (enemy.damage - totals.shield).max(0);
    let player_health = (healed - incoming).max(0);
    let kills = enemy_health <= 0;
    Projection {
        enemy_health,
        player_health,
        kills,
        dies: !kills && player_health <= 0,
    }
}

/// Heuristic value of one candidate play. Overkill, surplus shield and
/// overheal are worth nothing.
pub fn score_candidate(
    player: &Player,
    enemy: &Enemy,
    totals: &EffectTotals,
    weights: ObjectiveWeights,
) -> f64 {
    let projection = project(player, enemy, totals);
    let damage = totals.damage.min(enemy.health.max(0)) as f64;
    let shield = totals.shield.min(enemy.damage.max(0)) as f64;
    let healing = totals.healing.min(player.missing_health()) as f64;
    let mut score = weights.damage * damage
        + weights.shield * shield
        + weights.healing * healing
        + weights.pentacles * totals.pentacles as f64;
    if projection.kills {
        score += weights.kill_bonus;
    }
    if projection.dies {
        score -= weights.death_penalty;
    }
    score
}
