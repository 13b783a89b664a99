use crate::{CombatState, EffectTotals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    Continuing,
    EnemyDefeated,
    PlayerDefeated,
    RunWon,
}

/// Damage lands on the current enemy; shield is assigned, not stacked.
pub fn apply_player_effects(state: &mut CombatState, totals: &EffectTotals) {
    state.enemy_mut().health -= totals.damage;
    state.player.shield = totals.shield;
    state.player.heal(totals.healing);
    state.player.pentacles += totals.pentacles;
}

/// Returns the damage that got through the shield. Shield is spent either way.
pub fn apply_enemy_counterattack(state: &mut CombatState) -> i64 {
    let actual = (state.enemy().damage - state.player.shield).max(0);
    state.player.take_damage(actual);
    state.player.shield = 0;
    actual
}

/// Enemy health is checked before player health, so a hand that kills the
/// enemy wins even when the counter-attack was lethal.
pub fn check_outcome(state: &CombatState) -> RoundOutcome {
    if state.enemy().is_defeated() {
        if state.roster.has_next() {
            RoundOutcome::EnemyDefeated
        } else {
            RoundOutcome::RunWon
        }
    } else if state.player.is_defeated() {
        RoundOutcome::PlayerDefeated
    } else {
        RoundOutcome::Continuing
    }
}
