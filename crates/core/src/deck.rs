use crate::{Card, CardIdAllocator, DeckRule, RngState};

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
}

impl Deck {
    /// Suit-major, value-minor cross product followed by special copies.
    pub fn create(rule: &DeckRule, ids: &mut CardIdAllocator) -> Self {
        let mut draw = Vec::with_capacity(rule.card_count());
        for &suit in &rule.suits {
            for value in rule.min_value..=rule.max_value_for(suit) {
                draw.push(Card::normal(ids.alloc(), suit, value));
            }
        }
        for special in &rule.specials {
            for _ in 0..special.copies {
                draw.push(Card::special(ids.alloc(), special.kind));
            }
        }
        Self { draw }
    }

    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count.min(self.draw.len()));
        for _ in 0..count {
            if let Some(card) = self.draw.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }
}
