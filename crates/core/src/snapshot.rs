use crate::{CardId, EffectTotals, HandKind, Phase, Player, SpecialKind, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub label: String,
    #[serde(default)]
    pub suit: Option<Suit>,
    #[serde(default)]
    pub value: Option<u8>,
    #[serde(default)]
    pub special: Option<SpecialKind>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyView {
    pub index: usize,
    pub name: String,
    pub health: i64,
    pub baseline_health: i64,
    pub damage: i64,
}

/// Category and effect totals for the cards currently selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub hand: HandKind,
    pub label: String,
    pub multiplier: i64,
    pub scoring: Vec<CardId>,
    pub totals: EffectTotals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub phase: Phase,
    pub round: u32,
    pub seed: u64,
    pub busy: bool,
    pub player: Player,
    pub enemy: EnemyView,
    pub enemy_count: usize,
    pub hand: Vec<CardView>,
    pub deck_count: usize,
    pub discards_left: u8,
    pub preview: Preview,
}
