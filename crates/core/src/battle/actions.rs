use super::*;
use crate::{
    apply_enemy_counterattack, apply_player_effects, check_outcome, resolve_special, score_hand,
    Event, EventBus,
};
use tracing::debug;

impl Battle {
    /// Flips one card in or out of the selection. Returns the new state.
    pub fn toggle_select(&mut self, index: usize) -> Result<bool, BattleError> {
        self.ensure_ready()?;
        let id = self
            .hand
            .get(index)
            .map(|card| card.id)
            .ok_or(BattleError::InvalidSelection)?;
        if let Some(pos) = self.selection.iter().position(|selected| *selected == id) {
            self.selection.remove(pos);
            return Ok(false);
        }
        if self.selection.len() >= self.config.hand.max_play {
            return Err(BattleError::SelectionFull(self.selection.len()));
        }
        self.selection.push(id);
        Ok(true)
    }

    pub fn set_selection(&mut self, indices: &[usize]) -> Result<(), BattleError> {
        self.ensure_ready()?;
        let ids = self.ids_for(indices)?;
        if ids.len() > self.config.hand.max_play {
            return Err(BattleError::SelectionFull(ids.len()));
        }
        self.selection = ids;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn discard_selected(&mut self, events: &mut EventBus) -> Result<Vec<Card>, BattleError> {
        let indices = self.selection_indices();
        self.discard(&indices, events)
    }

    /// Drops the chosen cards and redraws up to the hand size. Uses one discard.
    pub fn discard(
        &mut self,
        indices: &[usize],
        events: &mut EventBus,
    ) -> Result<Vec<Card>, BattleError> {
        self.ensure_ready()?;
        if self.discards_left == 0 {
            return Err(BattleError::NoDiscardsLeft);
        }
        let ids = self.ids_for(indices)?;
        if ids.is_empty() {
            return Err(BattleError::InvalidSelection);
        }
        let discarded = self.take_cards(&ids);
        self.selection.clear();
        self.discards_left -= 1;
        events.push(Event::CardsDiscarded {
            cards: ids,
            discards_left: self.discards_left,
        });
        self.draw_to_hand(events);
        debug!(
            discarded = discarded.len(),
            discards_left = self.discards_left,
            "cards discarded"
        );
        Ok(discarded)
    }

    pub fn play_selected(&mut self, events: &mut EventBus) -> Result<PlayResult, BattleError> {
        let indices = self.selection_indices();
        self.play(&indices, events)
    }

    /// Resolves a whole round: evaluation, effects, specials, counter-attack,
    /// outcome, and the setup of whatever comes next.
    pub fn play(
        &mut self,
        indices: &[usize],
        events: &mut EventBus,
    ) -> Result<PlayResult, BattleError> {
        self.ensure_ready()?;
        let ids = self.ids_for(indices)?;
        let max = self.config.hand.max_play;
        if ids.is_empty() || ids.len() > max {
            return Err(BattleError::InvalidCardCount {
                count: ids.len(),
                min: 1,
                max,
            });
        }

        self.phase = Phase::Resolving;
        let played = self.take_cards(&ids);
        self.selection.clear();

        let breakdown = score_hand(&played, &self.table);
        events.push(Event::HandEvaluated {
            hand: breakdown.evaluation.hand,
            multiplier: breakdown.evaluation.multiplier,
            scoring: breakdown
                .evaluation
                .scoring_indices
                .iter()
                .map(|&idx| played[idx].id)
                .collect(),
        });
        let mut result = PlayResult::from_breakdown(played, breakdown);

        apply_player_effects(&mut self.combat, &result.totals);
        events.push(Event::EffectsApplied {
            totals: result.totals,
            enemy_health: self.combat.enemy().health,
            player_health: self.combat.player.health,
        });

        for card in &result.played {
            let Some(kind) = card.special_kind() else {
                continue;
            };
            let outcome = resolve_special(card.id, kind, &mut self.combat);
            events.push(Event::SpecialResolved(outcome));
            result.specials.push(outcome);
        }

        let incoming = self.combat.enemy().damage;
        result.counter_damage = apply_enemy_counterattack(&mut self.combat);
        events.push(Event::EnemyAttacked {
            damage: result.counter_damage,
            blocked: incoming - result.counter_damage,
            player_health: self.combat.player.health,
        });

        result.outcome = check_outcome(&self.combat);
        debug!(
            hand = result.evaluation.hand.label(),
            multiplier = result.evaluation.multiplier,
            damage = result.totals.damage,
            shield = result.totals.shield,
            healing = result.totals.healing,
            pentacles = result.totals.pentacles,
            counter = result.counter_damage,
            outcome = ?result.outcome,
            "play resolved"
        );
        self.finish_round(result.outcome, events);
        Ok(result)
    }
}
