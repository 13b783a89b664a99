use arcana_core::{evaluate_hand, Card, HandKind, Suit};

fn make_cards(specs: &[(Suit, u8)]) -> Vec<Card> {
    specs
        .iter()
        .enumerate()
        .map(|(idx, (suit, value))| Card::normal(idx as u32 + 1, *suit, *value))
        .collect()
}

macro_rules! hand_case {
    ($name:ident, [$(($suit:ident, $value:expr)),* $(,)?], $kind:expr, $mult:expr, $scoring:expr) => {
        #[test]
        fn $name() {
            let cards = make_cards(&[$((Suit::$suit, $value)),*]);
            let eval = evaluate_hand(&cards);
            assert_eq!(eval.hand, $kind);
            assert_eq!(eval.multiplier, $mult);
            let expected: &[usize] = &$scoring;
            assert_eq!(eval.scoring_indices, expected.to_vec());
        }
    };
}

hand_case!(
    straight_flush_of_swords,
    [(Swords, 1), (Swords, 2), (Swords, 3), (Swords, 4), (Swords, 5)],
    HandKind::StraightFlush,
    5,
    [0, 1, 2, 3, 4]
);
hand_case!(
    unordered_straight_flush,
    [(Cups, 4), (Cups, 2), (Cups, 5), (Cups, 1), (Cups, 3)],
    HandKind::StraightFlush,
    5,
    [0, 1, 2, 3, 4]
);
hand_case!(
    mixed_suit_straight,
    [(Swords, 1), (Cups, 2), (Wands, 3), (Pentacles, 4), (Swords, 5)],
    HandKind::Straight,
    3,
    [0, 1, 2, 3, 4]
);
hand_case!(
    full_house_three_threes_two_twos,
    [(Swords, 3), (Wands, 3), (Cups, 3), (Pentacles, 2), (Swords, 2)],
    HandKind::FullHouse,
    4,
    [0, 1, 2, 3, 4]
);
hand_case!(
    four_of_a_kind_with_kicker,
    [(Swords, 2), (Cups, 2), (Wands, 2), (Pentacles, 2), (Swords, 5)],
    HandKind::FourOfAKind,
    4,
    [0, 1, 2, 3]
);
hand_case!(
    three_of_a_kind_in_five,
    [(Swords, 4), (Cups, 4), (Wands, 4), (Pentacles, 1), (Swords, 5)],
    HandKind::ThreeOfAKind,
    3,
    [0, 1, 2]
);
hand_case!(
    two_pair_in_five,
    [(Swords, 1), (Cups, 1), (Wands, 3), (Pentacles, 3), (Swords, 5)],
    HandKind::TwoPair,
    2,
    [0, 1, 2, 3]
);
hand_case!(
    one_pair_in_five,
    [(Swords, 1), (Cups, 1), (Wands, 2), (Pentacles, 3), (Swords, 5)],
    HandKind::OnePair,
    2,
    [0, 1]
);
hand_case!(
    five_card_near_straight_with_pair,
    [(Swords, 1), (Cups, 2), (Wands, 3), (Pentacles, 4), (Swords, 4)],
    HandKind::OnePair,
    2,
    [3, 4]
);
hand_case!(
    two_card_pair_is_never_a_flush,
    [(Swords, 4), (Cups, 4)],
    HandKind::OnePair,
    2,
    [0, 1]
);
hand_case!(
    two_card_same_suit_pair,
    [(Swords, 4), (Swords, 4)],
    HandKind::OnePair,
    2,
    [0, 1]
);
hand_case!(
    four_suited_run_is_not_a_straight,
    [(Wands, 1), (Wands, 2), (Wands, 3), (Wands, 4)],
    HandKind::HighCard,
    1,
    []
);
hand_case!(
    single_card,
    [(Pentacles, 5)],
    HandKind::SingleCard,
    1,
    [0]
);
hand_case!(
    two_unmatched_cards,
    [(Pentacles, 5), (Cups, 1)],
    HandKind::HighCard,
    1,
    []
);
hand_case!(
    three_card_trips,
    [(Cups, 2), (Swords, 2), (Wands, 2)],
    HandKind::ThreeOfAKind,
    3,
    [0, 1, 2]
);
hand_case!(
    four_card_two_pair,
    [(Cups, 2), (Swords, 5), (Wands, 2), (Pentacles, 5)],
    HandKind::TwoPair,
    2,
    [0, 1, 2, 3]
);
hand_case!(
    four_card_quads,
    [(Cups, 3), (Swords, 3), (Wands, 3), (Pentacles, 3)],
    HandKind::FourOfAKind,
    4,
    [0, 1, 2, 3]
);
hand_case!(
    seven_card_full_house,
    [
        (Cups, 1),
        (Swords, 1),
        (Wands, 1),
        (Pentacles, 4),
        (Cups, 4),
        (Swords, 2),
        (Wands, 5)
    ],
    HandKind::FullHouse,
    4,
    [0, 1, 2, 3, 4]
);
hand_case!(
    six_card_three_pairs_falls_back_to_one_pair,
    [
        (Cups, 1),
        (Swords, 1),
        (Wands, 2),
        (Pentacles, 2),
        (Cups, 3),
        (Swords, 3)
    ],
    HandKind::OnePair,
    2,
    [0, 1, 2, 3, 4, 5]
);
hand_case!(
    six_card_run_is_not_a_straight,
    [
        (Cups, 1),
        (Swords, 2),
        (Wands, 3),
        (Pentacles, 4),
        (Cups, 5),
        (Swords, 1)
    ],
    HandKind::OnePair,
    2,
    [0, 5]
);

#[test]
fn five_of_a_kind_beats_everything_count_based() {
    let cards: Vec<Card> = (0..5)
        .map(|idx| Card::normal(idx + 1, Suit::Wands, 3))
        .collect();
    let eval = evaluate_hand(&cards);
    // One suit with five cards takes the flush path first.
    assert_eq!(eval.hand, HandKind::Flush);

    let mut mixed = cards;
    mixed[0] = Card::normal(10, Suit::Cups, 3);
    let eval = evaluate_hand(&mixed);
    assert_eq!(eval.hand, HandKind::FiveOfAKind);
    assert_eq!(eval.multiplier, 5);
    assert_eq!(eval.scoring_indices, vec![0, 1, 2, 3, 4]);
}

#[test]
fn scoring_positions_follow_input_order() {
    let cards = make_cards(&[
        (Suit::Swords, 5),
        (Suit::Cups, 2),
        (Suit::Wands, 5),
        (Suit::Pentacles, 1),
    ]);
    let eval = evaluate_hand(&cards);
    assert_eq!(eval.hand, HandKind::OnePair);
    assert_eq!(eval.scoring_indices, vec![0, 2]);
}

#[test]
fn evaluation_never_panics_on_empty_input() {
    let eval = evaluate_hand(&[]);
    assert_eq!(eval.hand, HandKind::NoCards);
    assert_eq!(eval.multiplier, 1);
    assert!(eval.scoring_indices.is_empty());
}
