use crate::{
    Card, CardId, CardIdAllocator, CombatState, ConfigError, Deck, EffectTotals, GameConfig,
    HandEvaluation, MultiplierTable, Phase, PlayBreakdown, RngState, RoundOutcome, SpecialOutcome,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod actions;
mod round;
mod view;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BattleError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("input is locked while a play resolves")]
    Busy,
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("no discards left")]
    NoDiscardsLeft,
    #[error("invalid card selection")]
    InvalidSelection,
    #[error("invalid card count {count}, expected {min}..={max}")]
    InvalidCardCount { count: usize, min: usize, max: usize },
    #[error("selection already holds {0} cards")]
    SelectionFull(usize),
}

/// Everything one resolved play produced, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResult {
    pub played: Vec<Card>,
    pub evaluation: HandEvaluation,
    pub totals: EffectTotals,
    pub specials: Vec<SpecialOutcome>,
    pub counter_damage: i64,
    pub outcome: RoundOutcome,
}

impl PlayResult {
    fn from_breakdown(played: Vec<Card>, breakdown: PlayBreakdown) -> Self {
        Self {
            played,
            evaluation: breakdown.evaluation,
            totals: breakdown.totals,
            specials: Vec::new(),
            counter_damage: 0,
            outcome: RoundOutcome::Continuing,
        }
    }
}

#[derive(Debug)]
pub struct Battle {
    pub config: GameConfig,
    pub table: MultiplierTable,
    pub rng: RngState,
    pub deck: Deck,
    pub hand: Vec<Card>,
    pub combat: CombatState,
    selection: Vec<CardId>,
    discards_left: u8,
    phase: Phase,
    input_locked: bool,
    round: u32,
    ids: CardIdAllocator,
}

impl Battle {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, BattleError> {
        config.validate()?;
        let table = MultiplierTable::from_config(&config);
        let combat = CombatState::new(&config.player, &config.enemies);
        let mut battle = Self {
            table,
            rng: RngState::from_seed(seed),
            deck: Deck::default(),
            hand: Vec::new(),
            combat,
            selection: Vec::new(),
            discards_left: config.hand.discards,
            phase: Phase::Reset,
            input_locked: false,
            round: 0,
            ids: CardIdAllocator::new(),
            config,
        };
        let mut scratch = crate::EventBus::default();
        battle.setup_round(&mut scratch);
        Ok(battle)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn discards_left(&self) -> u8 {
        self.discards_left
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Holds the busy guard while a presentation layer plays out the last result.
    pub fn lock_input(&mut self) {
        self.input_locked = true;
    }

    pub fn unlock_input(&mut self) {
        self.input_locked = false;
    }

    pub fn is_busy(&self) -> bool {
        self.input_locked || self.phase == Phase::Resolving
    }

    /// Current selection as positions in the hand, in hand order.
    pub fn selection_indices(&self) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| self.selection.contains(&card.id))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.hand
            .get(index)
            .map(|card| self.selection.contains(&card.id))
            .unwrap_or(false)
    }

    pub fn selected_cards(&self) -> Vec<Card> {
        self.hand
            .iter()
            .filter(|card| self.selection.contains(&card.id))
            .copied()
            .collect()
    }

    fn ensure_ready(&self) -> Result<(), BattleError> {
        if self.is_busy() {
            return Err(BattleError::Busy);
        }
        if self.phase != Phase::Drafting {
            return Err(BattleError::InvalidPhase(self.phase));
        }
        Ok(())
    }

    /// Resolves positions against the current hand. Duplicates collapse.
    fn ids_for(&self, indices: &[usize]) -> Result<Vec<CardId>, BattleError> {
        let mut unique = indices.to_vec();
        unique.sort_unstable();
        unique.dedup();
        unique
            .into_iter()
            .map(|idx| {
                self.hand
                    .get(idx)
                    .map(|card| card.id)
                    .ok_or(BattleError::InvalidSelection)
            })
            .collect()
    }

    /// Removes the given cards from the hand, keeping hand order.
    fn take_cards(&mut self, ids: &[CardId]) -> Vec<Card> {
        let mut taken = Vec::with_capacity(ids.len());
        let mut kept = Vec::with_capacity(self.hand.len());
        for card in self.hand.drain(..) {
            if ids.contains(&card.id) {
                taken.push(card);
            } else {
                kept.push(card);
            }
        }
        self.hand = kept;
        debug_assert_eq!(taken.len(), ids.len(), "selection referenced a card not in hand");
        taken
    }
}
