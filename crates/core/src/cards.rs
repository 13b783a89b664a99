use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Swords,
    Cups,
    Pentacles,
    Wands,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Swords, Suit::Cups, Suit::Pentacles, Suit::Wands];

    pub fn id(self) -> &'static str {
        match self {
            Suit::Swords => "swords",
            Suit::Cups => "cups",
            Suit::Pentacles => "pentacles",
            Suit::Wands => "wands",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "swords" | "sword" => Some(Suit::Swords),
            "cups" | "cup" => Some(Suit::Cups),
            "pentacles" | "pentacle" => Some(Suit::Pentacles),
            "wands" | "wand" => Some(Suit::Wands),
            _ => None,
        }
    }

    pub fn short(self) -> char {
        match self {
            Suit::Swords => 'S',
            Suit::Cups => 'C',
            Suit::Pentacles => 'P',
            Suit::Wands => 'W',
        }
    }
}

/// Identity of a single card instance, unique within one deck build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

/// Special cards are plain tags; their behaviour lives in the resolver's
/// dispatch table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    Death,
}

impl SpecialKind {
    pub const ALL: [SpecialKind; 1] = [SpecialKind::Death];

    pub fn id(self) -> &'static str {
        match self {
            SpecialKind::Death => "death",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == value.trim().to_ascii_lowercase())
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialKind::Death => "Death",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SpecialKind::Death => {
                "If you have at least 10 pentacles, deals 25 damage to the enemy. \
                 Otherwise, gives you 3 pentacles."
            }
        }
    }

    pub fn cost(self) -> i64 {
        match self {
            SpecialKind::Death => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Normal { suit: Suit, value: u8 },
    Special(SpecialKind),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
}

impl Card {
    pub fn normal(id: u32, suit: Suit, value: u8) -> Self {
        Self {
            id: CardId(id),
            kind: CardKind::Normal { suit, value },
        }
    }

    pub fn special(id: u32, kind: SpecialKind) -> Self {
        Self {
            id: CardId(id),
            kind: CardKind::Special(kind),
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self.kind {
            CardKind::Normal { suit, .. } => Some(suit),
            CardKind::Special(_) => None,
        }
    }

    pub fn value(&self) -> Option<u8> {
        match self.kind {
            CardKind::Normal { value, .. } => Some(value),
            CardKind::Special(_) => None,
        }
    }

    pub fn special_kind(&self) -> Option<SpecialKind> {
        match self.kind {
            CardKind::Special(kind) => Some(kind),
            CardKind::Normal { .. } => None,
        }
    }

    pub fn is_special(&self) -> bool {
        matches!(self.kind, CardKind::Special(_))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Normal { suit, value } => write!(f, "{}{}", suit.short(), value),
            CardKind::Special(kind) => write!(f, "[{}]", kind.name()),
        }
    }
}

/// Hands out card ids; one allocator per deck build.
#[derive(Debug, Clone, Default)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn alloc(&mut self) -> u32 {
        if self.next == 0 {
            self.next = 1;
        }
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}
