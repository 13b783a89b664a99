use arcana_core::{
    Battle, BattleError, Card, CardId, Event, EventBus, GameConfig, HandKind, Phase,
    RoundOutcome, SpecialKind, Suit,
};
use std::collections::HashSet;

const SEED: u64 = 0xC0FFEE;

fn new_battle() -> Battle {
    Battle::new(GameConfig::default(), SEED).expect("default config")
}

fn make_cards(specs: &[(Suit, u8)]) -> Vec<Card> {
    specs
        .iter()
        .enumerate()
        .map(|(idx, (suit, value))| Card::normal(1000 + idx as u32, *suit, *value))
        .collect()
}

fn swords_run() -> Vec<Card> {
    make_cards(&[
        (Suit::Swords, 1),
        (Suit::Swords, 2),
        (Suit::Swords, 3),
        (Suit::Swords, 4),
        (Suit::Swords, 5),
    ])
}

#[test]
fn new_battle_deals_a_full_hand() {
    let battle = new_battle();
    assert_eq!(battle.phase(), Phase::Drafting);
    assert_eq!(battle.hand.len(), 5);
    assert_eq!(battle.deck.len(), 15);
    assert_eq!(battle.discards_left(), 2);
    assert_eq!(battle.combat.player.health, 50);
    assert_eq!(battle.combat.roster.current, 0);
    assert_eq!(battle.round(), 1);
}

#[test]
fn same_seed_same_deal() {
    let a = new_battle();
    let b = new_battle();
    assert_eq!(a.hand, b.hand);
    assert_eq!(a.deck.draw, b.deck.draw);
}

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig {
        enemies: Vec::new(),
        ..GameConfig::default()
    };
    assert!(matches!(
        Battle::new(config, SEED),
        Err(BattleError::Config(_))
    ));
}

#[test]
fn straight_flush_defeats_first_enemy() {
    let mut battle = new_battle();
    battle.hand = swords_run();
    let mut events = EventBus::default();
    let result = battle.play(&[0, 1, 2, 3, 4], &mut events).expect("play");

    assert_eq!(result.evaluation.hand, HandKind::StraightFlush);
    assert_eq!(result.evaluation.multiplier, 5);
    assert_eq!(result.totals.damage, 75);
    assert_eq!(result.outcome, RoundOutcome::EnemyDefeated);
    assert_eq!(result.counter_damage, 6);

    assert_eq!(battle.combat.roster.current, 1);
    assert_eq!(battle.combat.enemy().health, 35);
    assert_eq!(battle.combat.player.health, 44);
    assert_eq!(battle.hand.len(), 5);
    assert_eq!(battle.discards_left(), 2);
    assert_eq!(battle.phase(), Phase::Drafting);
    assert!(battle.selection_indices().is_empty());

    let drained: Vec<Event> = events.drain().collect();
    assert!(drained.contains(&Event::EnemyDefeated { enemy_index: 0 }));
    assert!(matches!(drained.last(), Some(Event::HandDealt { .. })));
}

#[test]
fn continuing_round_redeals_and_keeps_damage() {
    let mut battle = new_battle();
    battle.hand = make_cards(&[
        (Suit::Swords, 4),
        (Suit::Wands, 2),
        (Suit::Cups, 1),
        (Suit::Pentacles, 3),
        (Suit::Cups, 5),
    ]);
    let mut events = EventBus::default();
    let result = battle.play(&[0, 1], &mut events).expect("play");
    assert_eq!(result.evaluation.hand, HandKind::HighCard);
    assert_eq!(result.totals.damage, 4);
    assert_eq!(result.totals.shield, 2);
    assert_eq!(result.counter_damage, 4);
    assert_eq!(result.outcome, RoundOutcome::Continuing);
    assert_eq!(battle.combat.enemy().health, 26);
    assert_eq!(battle.combat.player.health, 46);
    assert_eq!(battle.combat.player.shield, 0);
    assert_eq!(battle.hand.len(), 5);
    assert_eq!(battle.deck.len(), 15);
    assert_eq!(battle.round(), 2);
}

#[test]
fn player_defeat_resets_everything() {
    let mut battle = new_battle();
    battle.combat.player.health = 3;
    battle.combat.player.pentacles = 9;
    battle.combat.enemy_mut().health = 12;
    battle.hand = make_cards(&[(Suit::Cups, 1), (Suit::Swords, 2)]);
    let mut events = EventBus::default();
    let result = battle.play(&[0], &mut events).expect("play");
    assert_eq!(result.outcome, RoundOutcome::PlayerDefeated);
    assert_reset(&battle);
    assert!(events.iter().any(|event| *event == Event::PlayerDefeated));
}

#[test]
fn clearing_the_roster_wins_and_resets() {
    let mut battle = new_battle();
    battle.combat.roster.enemies[0].health = -5;
    battle.combat.roster.current = 1;
    battle.combat.enemy_mut().health = 5;
    battle.combat.player.pentacles = 14;
    battle.hand = make_cards(&[(Suit::Swords, 5)]);
    let mut events = EventBus::default();
    let result = battle.play(&[0], &mut events).expect("play");
    assert_eq!(result.outcome, RoundOutcome::RunWon);
    assert_reset(&battle);
    assert!(events.iter().any(|event| *event == Event::RunWon));
}

fn assert_reset(battle: &Battle) {
    assert_eq!(battle.combat.player.health, 50);
    assert_eq!(battle.combat.player.pentacles, 0);
    assert_eq!(battle.combat.player.shield, 0);
    assert_eq!(battle.combat.roster.current, 0);
    for enemy in &battle.combat.roster.enemies {
        assert_eq!(enemy.health, enemy.baseline_health);
    }
    assert_eq!(battle.combat.roster.enemies[0].health, 30);
    assert_eq!(battle.combat.roster.enemies[1].health, 35);
    assert_eq!(battle.hand.len(), 5);
    assert_eq!(battle.discards_left(), 2);
    assert_eq!(battle.phase(), Phase::Drafting);
}

#[test]
fn simultaneous_knockout_favours_the_player() {
    let mut battle = new_battle();
    battle.combat.player.health = 1;
    battle.combat.enemy_mut().health = 3;
    battle.hand = make_cards(&[(Suit::Swords, 3)]);
    let mut events = EventBus::default();
    let result = battle.play(&[0], &mut events).expect("play");
    assert_eq!(result.outcome, RoundOutcome::EnemyDefeated);
    assert_eq!(battle.combat.roster.current, 1);
    assert_eq!(battle.combat.player.health, 0);
}

#[test]
fn play_rejects_bad_counts_without_mutation() {
    let mut battle = new_battle();
    let before = battle.hand.clone();
    let mut events = EventBus::default();
    assert_eq!(
        battle.play(&[], &mut events),
        Err(BattleError::InvalidCardCount {
            count: 0,
            min: 1,
            max: 5
        })
    );
    assert_eq!(
        battle.play(&[0, 9], &mut events),
        Err(BattleError::InvalidSelection)
    );

    battle.hand.extend(make_cards(&[(Suit::Cups, 2)]));
    let before_six = battle.hand.clone();
    assert!(matches!(
        battle.play(&[0, 1, 2, 3, 4, 5], &mut events),
        Err(BattleError::InvalidCardCount { count: 6, .. })
    ));
    assert_eq!(battle.hand, before_six);
    assert_eq!(&battle.hand[..5], &before[..]);
    assert!(events.is_empty());
}

#[test]
fn duplicate_indices_collapse() {
    let mut battle = new_battle();
    battle.hand = make_cards(&[(Suit::Swords, 2), (Suit::Cups, 3)]);
    let mut events = EventBus::default();
    let result = battle.play(&[0, 0, 0], &mut events).expect("play");
    assert_eq!(result.played.len(), 1);
    assert_eq!(result.evaluation.hand, HandKind::SingleCard);
}

#[test]
fn discard_replaces_cards_and_uses_a_charge() {
    let mut battle = new_battle();
    let removed: HashSet<CardId> = [battle.hand[0].id, battle.hand[3].id].into_iter().collect();
    let mut events = EventBus::default();
    let discarded = battle.discard(&[3, 0], &mut events).expect("discard");
    assert_eq!(discarded.len(), 2);
    assert_eq!(battle.hand.len(), 5);
    assert_eq!(battle.deck.len(), 13);
    assert_eq!(battle.discards_left(), 1);
    assert!(battle.hand.iter().all(|card| !removed.contains(&card.id)));

    battle.discard(&[0], &mut events).expect("second discard");
    assert_eq!(battle.discards_left(), 0);
    assert_eq!(
        battle.discard(&[0], &mut events),
        Err(BattleError::NoDiscardsLeft)
    );
}

#[test]
fn empty_discard_is_refused() {
    let mut battle = new_battle();
    let mut events = EventBus::default();
    assert_eq!(
        battle.discard(&[], &mut events),
        Err(BattleError::InvalidSelection)
    );
    assert_eq!(battle.discards_left(), 2);
}

#[test]
fn selection_tracks_cards_not_positions() {
    let mut battle = new_battle();
    let target = battle.hand[4].id;
    assert_eq!(battle.toggle_select(4), Ok(true));
    assert_eq!(battle.toggle_select(1), Ok(true));
    assert_eq!(battle.selection_indices(), vec![1, 4]);
    assert_eq!(battle.toggle_select(1), Ok(false));
    assert_eq!(battle.selection_indices(), vec![4]);
    assert_eq!(battle.selected_cards()[0].id, target);

    let mut events = EventBus::default();
    let discarded = battle.discard_selected(&mut events).expect("discard");
    assert_eq!(discarded[0].id, target);
    assert!(battle.selection_indices().is_empty());
}

#[test]
fn selection_is_capped_at_five() {
    let mut battle = new_battle();
    battle.hand.extend(make_cards(&[(Suit::Cups, 2)]));
    for idx in 0..5 {
        battle.toggle_select(idx).expect("select");
    }
    assert_eq!(battle.toggle_select(5), Err(BattleError::SelectionFull(5)));
    assert_eq!(
        battle.set_selection(&[0, 1, 2, 3, 4, 5]),
        Err(BattleError::SelectionFull(6))
    );
    assert_eq!(battle.toggle_select(9), Err(BattleError::InvalidSelection));
}

#[test]
fn selection_cap_follows_max_play() {
    let mut config = GameConfig::default();
    config.hand.max_play = 3;
    let mut battle = Battle::new(config, SEED).expect("battle");
    for idx in 0..3 {
        battle.toggle_select(idx).expect("select");
    }
    assert_eq!(battle.toggle_select(3), Err(BattleError::SelectionFull(3)));
    assert_eq!(
        battle.set_selection(&[0, 1, 2, 3]),
        Err(BattleError::SelectionFull(4))
    );

    let mut events = EventBus::default();
    let result = battle.play_selected(&mut events).expect("play");
    assert_eq!(result.played.len(), 3);
}

#[test]
fn preview_indices_ignores_selection_and_bad_positions() {
    let mut battle = new_battle();
    battle.hand = swords_run();
    battle.set_selection(&[0]).expect("select");
    let preview = battle.preview_indices(&[4, 3, 2, 1, 0, 0, 9]);
    assert_eq!(preview.hand, HandKind::StraightFlush);
    assert_eq!(preview.totals.damage, 75);
    assert_eq!(preview.scoring.len(), 5);
    assert_eq!(battle.preview().hand, HandKind::SingleCard);
}

#[test]
fn play_selected_uses_stored_selection() {
    let mut battle = new_battle();
    battle.hand = swords_run();
    battle.set_selection(&[0, 1, 2, 3, 4]).expect("select");
    let preview = battle.preview();
    assert_eq!(preview.hand, HandKind::StraightFlush);
    assert_eq!(preview.label, "Straight Flush");
    assert_eq!(preview.totals.damage, 75);

    let mut events = EventBus::default();
    let result = battle.play_selected(&mut events).expect("play");
    assert_eq!(result.outcome, RoundOutcome::EnemyDefeated);
}

#[test]
fn locked_input_refuses_actions() {
    let mut battle = new_battle();
    let before = battle.hand.clone();
    battle.lock_input();
    assert!(battle.is_busy());
    let mut events = EventBus::default();
    assert_eq!(battle.play(&[0], &mut events), Err(BattleError::Busy));
    assert_eq!(battle.discard(&[0], &mut events), Err(BattleError::Busy));
    assert_eq!(battle.toggle_select(0), Err(BattleError::Busy));
    assert_eq!(battle.new_run(&mut events), Err(BattleError::Busy));
    assert_eq!(battle.hand, before);
    battle.unlock_input();
    assert!(battle.play(&[0], &mut events).is_ok());
}

#[test]
fn death_card_resolves_through_dispatch() {
    let mut battle = new_battle();
    battle.combat.player.pentacles = 12;
    battle.hand = vec![
        Card::special(2000, SpecialKind::Death),
        Card::normal(2001, Suit::Swords, 1),
    ];
    let mut events = EventBus::default();
    let result = battle.play(&[0, 1], &mut events).expect("play");
    assert_eq!(result.evaluation.hand, HandKind::SingleCard);
    assert_eq!(result.specials.len(), 1);
    assert_eq!(result.specials[0].effect.damage, 25);
    assert_eq!(battle.combat.enemy().health, 4);
    assert_eq!(battle.combat.player.pentacles, 2);
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::SpecialResolved(_))));
}

#[test]
fn death_card_counts_pentacles_gained_this_hand() {
    let mut battle = new_battle();
    battle.combat.player.pentacles = 5;
    battle.hand = vec![
        Card::normal(3000, Suit::Pentacles, 5),
        Card::special(3001, SpecialKind::Death),
    ];
    let mut events = EventBus::default();
    let result = battle.play(&[0, 1], &mut events).expect("play");
    assert_eq!(result.specials[0].effect.damage, 25);
    assert_eq!(battle.combat.player.pentacles, 0);
}

#[test]
fn configured_specials_reach_the_deck() {
    let mut config = GameConfig::default();
    config.deck.specials.push(arcana_core::SpecialCardRule {
        kind: SpecialKind::Death,
        copies: 1,
    });
    let battle = Battle::new(config, SEED).expect("battle");
    assert_eq!(battle.deck.len() + battle.hand.len(), 21);
}

#[test]
fn oversized_hand_drains_the_deck_without_error() {
    let mut config = GameConfig::default();
    config.hand.hand_size = 30;
    let mut battle = Battle::new(config, SEED).expect("battle");
    assert_eq!(battle.hand.len(), 20);
    assert!(battle.deck.is_empty());
    let mut events = EventBus::default();
    battle.discard(&[0, 1], &mut events).expect("discard");
    assert_eq!(battle.hand.len(), 18);
}

#[test]
fn new_run_restores_baseline() {
    let mut battle = new_battle();
    battle.combat.player.health = 20;
    battle.combat.player.pentacles = 7;
    battle.combat.roster.current = 1;
    battle.combat.enemy_mut().health = 2;
    let mut events = EventBus::default();
    battle.new_run(&mut events).expect("new run");
    assert_reset(&battle);
}

#[test]
fn snapshot_reflects_selection_and_serializes() {
    let mut battle = new_battle();
    battle.toggle_select(2).expect("select");
    let snapshot = battle.snapshot();
    assert_eq!(snapshot.hand.len(), 5);
    assert!(snapshot.hand[2].selected);
    assert_eq!(snapshot.hand.iter().filter(|card| card.selected).count(), 1);
    assert_eq!(snapshot.deck_count, 15);
    assert_eq!(snapshot.discards_left, 2);
    assert_eq!(snapshot.enemy.index, 0);
    assert_eq!(snapshot.enemy_count, 2);
    assert_eq!(snapshot.enemy.health, 30);
    assert_eq!(snapshot.seed, SEED);
    assert!(!snapshot.busy);

    let json = serde_json::to_value(&snapshot).expect("json");
    assert_eq!(json["deck_count"], 15);
    assert_eq!(json["player"]["health"], 50);
}
