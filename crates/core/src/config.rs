use crate::{HandKind, SpecialKind, Suit};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Upper bound on cards in a single play.
pub const MAX_PLAY_CARDS: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("roster has no enemies")]
    EmptyRoster,
    #[error("enemy {index} has non-positive health {health}")]
    EnemyHealth { index: usize, health: i64 },
    #[error("enemy {index} has negative damage {damage}")]
    EnemyDamage { index: usize, damage: i64 },
    #[error("player max health must be positive, got {0}")]
    PlayerHealth(i64),
    #[error("starting pentacles must not be negative, got {0}")]
    PlayerPentacles(i64),
    #[error("hand size must be positive")]
    HandSize,
    #[error("max play must be within 1..={MAX_PLAY_CARDS}, got {0}")]
    MaxPlay(usize),
    #[error("deck has no suits")]
    NoSuits,
    #[error("suit {0:?} listed twice")]
    DuplicateSuit(Suit),
    #[error("invalid value range {min}..={max}")]
    ValueRange { min: u8, max: u8 },
    #[error("cap for {suit:?} ({cap}) falls below the minimum value {min}")]
    CapBelowMin { suit: Suit, cap: u8, min: u8 },
    #[error("multiplier for {hand:?} must be at least 1, got {multiplier}")]
    Multiplier { hand: HandKind, multiplier: i64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRule {
    pub max_health: i64,
    #[serde(default)]
    pub starting_pentacles: i64,
}

impl Default for PlayerRule {
    fn default() -> Self {
        Self {
            max_health: 50,
            starting_pentacles: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRule {
    pub hand_size: usize,
    pub discards: u8,
    #[serde(default = "default_max_play")]
    pub max_play: usize,
}

fn default_max_play() -> usize {
    MAX_PLAY_CARDS
}

impl Default for HandRule {
    fn default() -> Self {
        Self {
            hand_size: 5,
            discards: 2,
            max_play: MAX_PLAY_CARDS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuitValueCap {
    pub suit: Suit,
    pub max_value: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecialCardRule {
    pub kind: SpecialKind,
    #[serde(default = "default_copies")]
    pub copies: u8,
}

fn default_copies() -> u8 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckRule {
    pub suits: Vec<Suit>,
    pub min_value: u8,
    pub max_value: u8,
    #[serde(default)]
    pub caps: Vec<SuitValueCap>,
    #[serde(default)]
    pub specials: Vec<SpecialCardRule>,
}

impl Default for DeckRule {
    fn default() -> Self {
        Self {
            suits: Suit::ALL.to_vec(),
            min_value: 1,
            max_value: 5,
            caps: Vec::new(),
            specials: Vec::new(),
        }
    }
}

impl DeckRule {
    pub fn max_value_for(&self, suit: Suit) -> u8 {
        self.caps
            .iter()
            .find(|cap| cap.suit == suit)
            .map(|cap| cap.max_value.min(self.max_value))
            .unwrap_or(self.max_value)
    }

    pub fn card_count(&self) -> usize {
        let normal: usize = self
            .suits
            .iter()
            .map(|&suit| {
                let max = self.max_value_for(suit);
                if max < self.min_value {
                    0
                } else {
                    (max - self.min_value) as usize + 1
                }
            })
            .sum();
        let special: usize = self.specials.iter().map(|rule| rule.copies as usize).sum();
        normal + special
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnemyRule {
    #[serde(default)]
    pub name: Option<String>,
    pub health: i64,
    pub damage: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultiplierRule {
    pub hand: HandKind,
    pub multiplier: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    #[serde(default)]
    pub player: PlayerRule,
    #[serde(default)]
    pub hand: HandRule,
    #[serde(default)]
    pub deck: DeckRule,
    pub enemies: Vec<EnemyRule>,
    #[serde(default)]
    pub multipliers: Vec<MultiplierRule>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerRule::default(),
            hand: HandRule::default(),
            deck: DeckRule::default(),
            enemies: vec![
                EnemyRule {
                    name: None,
                    health: 30,
                    damage: 6,
                },
                EnemyRule {
                    name: None,
                    health: 35,
                    damage: 8,
                },
            ],
            multipliers: Vec::new(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player.max_health <= 0 {
            return Err(ConfigError::PlayerHealth(self.player.max_health));
        }
        if self.player.starting_pentacles < 0 {
            return Err(ConfigError::PlayerPentacles(self.player.starting_pentacles));
        }
        if self.hand.hand_size == 0 {
            return Err(ConfigError::HandSize);
        }
        if self.hand.max_play == 0 || self.hand.max_play > MAX_PLAY_CARDS {
            return Err(ConfigError::MaxPlay(self.hand.max_play));
        }
        self.validate_deck()?;
        if self.enemies.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        for (index, enemy) in self.enemies.iter().enumerate() {
            if enemy.health <= 0 {
                return Err(ConfigError::EnemyHealth {
                    index,
                    health: enemy.health,
                });
            }
            if enemy.damage < 0 {
                return Err(ConfigError::EnemyDamage {
                    index,
                    damage: enemy.damage,
                });
            }
        }
        for rule in &self.multipliers {
            if rule.multiplier < 1 {
                return Err(ConfigError::Multiplier {
                    hand: rule.hand,
                    multiplier: rule.multiplier,
                });
            }
        }
        Ok(())
    }

    fn validate_deck(&self) -> Result<(), ConfigError> {
        let deck = &self.deck;
        if deck.suits.is_empty() {
            return Err(ConfigError::NoSuits);
        }
        let mut seen = HashSet::new();
        for suit in &deck.suits {
            if !seen.insert(*suit) {
                return Err(ConfigError::DuplicateSuit(*suit));
            }
        }
        if deck.min_value == 0 || deck.max_value > 13 || deck.min_value > deck.max_value {
            return Err(ConfigError::ValueRange {
                min: deck.min_value,
                max: deck.max_value,
            });
        }
        for cap in &deck.caps {
            if cap.max_value < deck.min_value {
                return Err(ConfigError::CapBelowMin {
                    suit: cap.suit,
                    cap: cap.max_value,
                    min: deck.min_value,
                });
            }
        }
        Ok(())
    }
}
