use super::*;
use crate::{score_hand, BattleSnapshot, CardView, EnemyView, Preview};

impl Battle {
    pub fn preview(&self) -> Preview {
        preview_cards(&self.selected_cards(), &self.table)
    }

    /// Preview for arbitrary positions; out-of-range positions are skipped.
    pub fn preview_indices(&self, indices: &[usize]) -> Preview {
        let mut unique = indices.to_vec();
        unique.sort_unstable();
        unique.dedup();
        let cards: Vec<Card> = unique
            .into_iter()
            .filter_map(|idx| self.hand.get(idx).copied())
            .collect();
        preview_cards(&cards, &self.table)
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        let hand = self
            .hand
            .iter()
            .map(|card| CardView {
                id: card.id,
                label: card.to_string(),
                suit: card.suit(),
                value: card.value(),
                special: card.special_kind(),
                selected: self.selection.contains(&card.id),
            })
            .collect();
        let index = self.combat.roster.current;
        let enemy = self.combat.enemy();
        BattleSnapshot {
            phase: self.phase,
            round: self.round,
            seed: self.rng.seed(),
            busy: self.is_busy(),
            player: self.combat.player.clone(),
            enemy: EnemyView {
                index,
                name: enemy.display_name(index),
                health: enemy.health,
                baseline_health: enemy.baseline_health,
                damage: enemy.damage,
            },
            enemy_count: self.combat.roster.len(),
            hand,
            deck_count: self.deck.len(),
            discards_left: self.discards_left,
            preview: self.preview(),
        }
    }
}

fn preview_cards(cards: &[Card], table: &MultiplierTable) -> Preview {
    let breakdown = score_hand(cards, table);
    Preview {
        hand: breakdown.evaluation.hand,
        label: breakdown.evaluation.hand.label().to_string(),
        multiplier: breakdown.evaluation.multiplier,
        scoring: breakdown
            .evaluation
            .scoring_indices
            .iter()
            .map(|&idx| cards[idx].id)
            .collect(),
        totals: breakdown.totals,
    }
}
