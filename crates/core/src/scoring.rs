use crate::{classify_hand, Card, GameConfig, HandEvaluation, HandKind, Suit};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MultiplierTable {
    overrides: HashMap<HandKind, i64>,
}

impl MultiplierTable {
    pub fn from_config(config: &GameConfig) -> Self {
        let mut overrides = HashMap::new();
        for rule in &config.multipliers {
            overrides.insert(rule.hand, rule.multiplier);
        }
        Self { overrides }
    }

    pub fn multiplier(&self, kind: HandKind) -> i64 {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_multiplier())
    }
}

pub fn evaluate_hand_with_table(cards: &[Card], table: &MultiplierTable) -> HandEvaluation {
    let (hand, scoring_indices) = classify_hand(cards);
    HandEvaluation {
        hand,
        multiplier: table.multiplier(hand),
        scoring_indices,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTotals {
    pub damage: i64,
    pub shield: i64,
    pub healing: i64,
    pub pentacles: i64,
}

impl EffectTotals {
    pub fn add(&mut self, suit: Suit, amount: i64) {
        match suit {
            Suit::Swords => self.damage += amount,
            Suit::Wands => self.shield += amount,
            Suit::Cups => self.healing += amount,
            Suit::Pentacles => self.pentacles += amount,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Suit-routed totals; scoring positions get `multiplier`, the rest count once.
/// Special cards add nothing here.
pub fn compute_effects(cards: &[Card], scoring_indices: &[usize], multiplier: i64) -> EffectTotals {
    let mut totals = EffectTotals::default();
    for (idx, card) in cards.iter().enumerate() {
        let (Some(suit), Some(value)) = (card.suit(), card.value()) else {
            continue;
        };
        let factor = if scoring_indices.contains(&idx) {
            multiplier
        } else {
            1
        };
        totals.add(suit, value as i64 * factor);
    }
    totals
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayBreakdown {
    pub evaluation: HandEvaluation,
    pub totals: EffectTotals,
}

pub fn score_hand(cards: &[Card], table: &MultiplierTable) -> PlayBreakdown {
    let evaluation = evaluate_hand_with_table(cards, table);
    let totals = compute_effects(cards, &evaluation.scoring_indices, evaluation.multiplier);
    PlayBreakdown { evaluation, totals }
}
