pub use arcana_core::{
    DeckRule, EnemyRule, GameConfig, HandKind, HandRule, MultiplierRule, PlayerRule,
    SpecialCardRule, SpecialKind, Suit, SuitValueCap,
};
