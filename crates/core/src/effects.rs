use crate::{CardId, CombatState, SpecialKind};
use serde::{Deserialize, Serialize};

const DEATH_DAMAGE: i64 = 25;
const DEATH_CONSOLATION: i64 = 3;

/// What a special card did when it resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialEffect {
    pub damage: i64,
    pub pentacles_spent: i64,
    pub pentacles_gained: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialOutcome {
    pub card: CardId,
    pub kind: SpecialKind,
    pub effect: SpecialEffect,
}

pub type SpecialEffectFn = fn(SpecialKind, &mut CombatState) -> SpecialEffect;

pub fn special_effect(kind: SpecialKind) -> SpecialEffectFn {
    match kind {
        SpecialKind::Death => death,
    }
}

pub fn resolve_special(card: CardId, kind: SpecialKind, state: &mut CombatState) -> SpecialOutcome {
    let effect = special_effect(kind)(kind, state);
    SpecialOutcome { card, kind, effect }
}

fn death(kind: SpecialKind, state: &mut CombatState) -> SpecialEffect {
    let cost = kind.cost();
    if state.player.pentacles >= cost {
        state.player.pentacles -= cost;
        state.enemy_mut().health -= DEATH_DAMAGE;
        SpecialEffect {
            damage: DEATH_DAMAGE,
            pentacles_spent: cost,
            pentacles_gained: 0,
        }
    } else {
        state.player.pentacles += DEATH_CONSOLATION;
        SpecialEffect {
            damage: 0,
            pentacles_spent: 0,
            pentacles_gained: DEATH_CONSOLATION,
        }
    }
}
