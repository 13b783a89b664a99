use crate::{CardId, EffectTotals, HandKind, SpecialOutcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        enemy_index: usize,
        enemy_health: i64,
        discards: u8,
    },
    HandDealt {
        count: usize,
        deck_left: usize,
    },
    CardsDiscarded {
        cards: Vec<CardId>,
        discards_left: u8,
    },
    HandEvaluated {
        hand: HandKind,
        multiplier: i64,
        scoring: Vec<CardId>,
    },
    EffectsApplied {
        totals: EffectTotals,
        enemy_health: i64,
        player_health: i64,
    },
    SpecialResolved(SpecialOutcome),
    EnemyAttacked {
        damage: i64,
        blocked: i64,
        player_health: i64,
    },
    EnemyDefeated {
        enemy_index: usize,
    },
    RunWon,
    PlayerDefeated,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.queue.iter()
    }
}
