use crate::{Card, Suit};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    NoCards,
    HighCard,
    SingleCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    FiveOfAKind,
}

impl HandKind {
    pub const ALL: [HandKind; 12] = [
        HandKind::NoCards,
        HandKind::HighCard,
        HandKind::SingleCard,
        HandKind::OnePair,
        HandKind::TwoPair,
        HandKind::ThreeOfAKind,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::FourOfAKind,
        HandKind::StraightFlush,
        HandKind::FiveOfAKind,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::NoCards => "no_cards",
            HandKind::HighCard => "high_card",
            HandKind::SingleCard => "single_card",
            HandKind::OnePair => "one_pair",
            HandKind::TwoPair => "two_pair",
            HandKind::ThreeOfAKind => "three_kind",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::FourOfAKind => "four_kind",
            HandKind::StraightFlush => "straight_flush",
            HandKind::FiveOfAKind => "five_kind",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HandKind::NoCards => "No Cards",
            HandKind::HighCard => "High Card",
            HandKind::SingleCard => "Single Card",
            HandKind::OnePair => "One Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::FourOfAKind => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::FiveOfAKind => "Five of a Kind",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.id() == value)
    }

    pub fn default_multiplier(self) -> i64 {
        match self {
            HandKind::NoCards | HandKind::HighCard | HandKind::SingleCard => 1,
            HandKind::OnePair | HandKind::TwoPair => 2,
            HandKind::ThreeOfAKind | HandKind::Straight | HandKind::Flush => 3,
            HandKind::FullHouse | HandKind::FourOfAKind => 4,
            HandKind::StraightFlush | HandKind::FiveOfAKind => 5,
        }
    }
}

/// Result of one classification. Positions index into the evaluated slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub hand: HandKind,
    pub multiplier: i64,
    pub scoring_indices: Vec<usize>,
}

impl HandEvaluation {
    pub fn is_scoring(&self, position: usize) -> bool {
        self.scoring_indices.contains(&position)
    }
}

/// Classifies `cards` using the built-in multipliers.
pub fn evaluate_hand(cards: &[Card]) -> HandEvaluation {
    let (hand, scoring_indices) = classify_hand(cards);
    HandEvaluation {
        hand,
        multiplier: hand.default_multiplier(),
        scoring_indices,
    }
}

/// Category plus scoring positions. Special cards are skipped: they never
/// count toward a pattern and never score.
pub fn classify_hand(cards: &[Card]) -> (HandKind, Vec<usize>) {
    if cards.is_empty() {
        return (HandKind::NoCards, Vec::new());
    }

    let normal: Vec<(usize, Suit, u8)> = cards
        .iter()
        .enumerate()
        .filter_map(|(idx, card)| Some((idx, card.suit()?, card.value()?)))
        .collect();
    if normal.is_empty() {
        return (HandKind::HighCard, Vec::new());
    }

    let mut value_counts: BTreeMap<u8, usize> = BTreeMap::new();
    let mut suits: HashSet<Suit> = HashSet::new();
    for &(_, suit, value) in &normal {
        *value_counts.entry(value).or_insert(0) += 1;
        suits.insert(suit);
    }

    if normal.len() == 5 {
        let single_suit = suits.len() == 1;
        let straight = is_straight(&value_counts);
        let all_positions = || normal.iter().map(|(idx, _, _)| *idx).collect::<Vec<_>>();
        if single_suit && straight {
            return (HandKind::StraightFlush, all_positions());
        }
        if straight {
            return (HandKind::Straight, all_positions());
        }
        if single_suit {
            return (HandKind::Flush, all_positions());
        }
    }

    let max_count = value_counts.values().copied().max().unwrap_or(0);
    let pair_count = value_counts.values().filter(|&&count| count == 2).count();
    let positions_for = |wanted: &dyn Fn(usize) -> bool| -> Vec<usize> {
        normal
            .iter()
            .filter(|(_, _, value)| wanted(value_counts[value]))
            .map(|(idx, _, _)| *idx)
            .collect()
    };

    if max_count >= 5 {
        return (HandKind::FiveOfAKind, positions_for(&|count| count >= 5));
    }
    if max_count == 4 {
        return (HandKind::FourOfAKind, positions_for(&|count| count == 4));
    }
    if max_count == 3 && pair_count > 0 {
        return (
            HandKind::FullHouse,
            positions_for(&|count| count == 3 || count == 2),
        );
    }
    if max_count == 3 {
        return (HandKind::ThreeOfAKind, positions_for(&|count| count == 3));
    }
    if pair_count == 2 {
        return (HandKind::TwoPair, positions_for(&|count| count == 2));
    }
    if max_count == 2 {
        return (HandKind::OnePair, positions_for(&|count| count == 2));
    }
    if normal.len() == 1 {
        return (HandKind::SingleCard, vec![normal[0].0]);
    }
    (HandKind::HighCard, Vec::new())
}

fn is_straight(value_counts: &BTreeMap<u8, usize>) -> bool {
    if value_counts.len() != 5 {
        return false;
    }
    match (value_counts.keys().next(), value_counts.keys().next_back()) {
        (Some(min), Some(max)) => max - min == 4,
        _ => false,
    }
}
