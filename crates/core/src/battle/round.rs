use super::*;
use crate::{Event, EventBus, Player};
use tracing::{debug, info};

impl Battle {
    /// Fresh deck, fresh hand, discards and shield back to their round values.
    pub(super) fn setup_round(&mut self, events: &mut EventBus) {
        self.deck = Deck::create(&self.config.deck, &mut self.ids);
        self.deck.shuffle(&mut self.rng);
        self.hand.clear();
        self.selection.clear();
        self.discards_left = self.config.hand.discards;
        self.combat.player.shield = 0;
        self.round = self.round.saturating_add(1);
        events.push(Event::RoundStarted {
            enemy_index: self.combat.roster.current,
            enemy_health: self.combat.enemy().health,
            discards: self.discards_left,
        });
        self.draw_to_hand(events);
        self.phase = Phase::Drafting;
        debug!(
            round = self.round,
            enemy = self.combat.roster.current,
            hand = self.hand.len(),
            deck = self.deck.len(),
            "round ready"
        );
    }

    /// Tops the hand up to the target size. An exhausted deck leaves it short.
    pub(super) fn draw_to_hand(&mut self, events: &mut EventBus) {
        let needed = self.config.hand.hand_size.saturating_sub(self.hand.len());
        if needed == 0 {
            return;
        }
        let mut drawn = self.deck.draw_cards(needed);
        if drawn.len() < needed {
            debug!(needed, drawn = drawn.len(), "deck exhausted");
        }
        let count = drawn.len();
        self.hand.append(&mut drawn);
        if count > 0 {
            events.push(Event::HandDealt {
                count,
                deck_left: self.deck.len(),
            });
        }
    }

    pub(super) fn reset_run(&mut self, events: &mut EventBus) {
        self.phase = Phase::Reset;
        self.combat.roster.reset();
        self.combat.player = Player::new(&self.config.player);
        info!(seed = self.rng.seed(), "run reset to baseline");
        self.setup_round(events);
    }

    pub(super) fn finish_round(&mut self, outcome: RoundOutcome, events: &mut EventBus) {
        match outcome {
            RoundOutcome::Continuing => {
                self.phase = Phase::RoundEnd;
                self.setup_round(events);
            }
            RoundOutcome::EnemyDefeated => {
                let defeated = self.combat.roster.current;
                events.push(Event::EnemyDefeated {
                    enemy_index: defeated,
                });
                self.combat.roster.advance();
                info!(defeated, next = self.combat.roster.current, "enemy defeated");
                self.phase = Phase::RoundEnd;
                self.setup_round(events);
            }
            RoundOutcome::RunWon => {
                events.push(Event::EnemyDefeated {
                    enemy_index: self.combat.roster.current,
                });
                events.push(Event::RunWon);
                info!(round = self.round, "run won");
                self.reset_run(events);
            }
            RoundOutcome::PlayerDefeated => {
                events.push(Event::PlayerDefeated);
                info!(
                    round = self.round,
                    enemy = self.combat.roster.current,
                    "player defeated"
                );
                self.reset_run(events);
            }
        }
    }

    pub fn new_run(&mut self, events: &mut EventBus) -> Result<(), BattleError> {
        if self.is_busy() {
            return Err(BattleError::Busy);
        }
        self.reset_run(events);
        Ok(())
    }
}
