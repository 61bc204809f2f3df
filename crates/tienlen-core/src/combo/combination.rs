use crate::model::card::{Card, format_cards};
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationKind {
    Single,
    Pair,
    Triple,
    Quad,
    Straight,
    DoubleStraight,
}

impl CombinationKind {
    pub const ALL: [CombinationKind; 6] = [
        CombinationKind::Single,
        CombinationKind::Pair,
        CombinationKind::Triple,
        CombinationKind::Quad,
        CombinationKind::Straight,
        CombinationKind::DoubleStraight,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CombinationKind::Single => "single",
            CombinationKind::Pair => "pair",
            CombinationKind::Triple => "triple",
            CombinationKind::Quad => "quad",
            CombinationKind::Straight => "straight",
            CombinationKind::DoubleStraight => "double_straight",
        }
    }

    /// Size of the rank group for pair/triple/quad kinds.
    pub const fn set_size(self) -> Option<usize> {
        match self {
            CombinationKind::Single => Some(1),
            CombinationKind::Pair => Some(2),
            CombinationKind::Triple => Some(3),
            CombinationKind::Quad => Some(4),
            CombinationKind::Straight | CombinationKind::DoubleStraight => None,
        }
    }
}

impl fmt::Display for CombinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison key of a combination: the rank of its highest card, then that
/// card's suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Strength {
    pub rank: Rank,
    pub suit: Suit,
}

impl From<Card> for Strength {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank,
            suit: card.suit,
        }
    }
}

impl Strength {
    /// Flat numeric form, `rank index * 100 + suit index`.
    pub const fn value(self) -> u32 {
        (self.rank as u32) * 100 + self.suit as u32
    }
}

/// A legally playable grouping of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination {
    kind: CombinationKind,
    cards: Vec<Card>,
    highest: Card,
}

impl Combination {
    /// Builds a combination from cards the finder has already validated.
    /// Cards are stored in game order.
    pub(crate) fn new(kind: CombinationKind, mut cards: Vec<Card>) -> Option<Self> {
        cards.sort();
        let highest = *cards.last()?;
        Some(Self {
            kind,
            cards,
            highest,
        })
    }

    pub fn kind(&self) -> CombinationKind {
        self.kind
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn highest_card(&self) -> Card {
        self.highest
    }

    pub fn strength(&self) -> Strength {
        Strength::from(self.highest)
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// True when every card has the given rank.
    pub fn all_rank(&self, rank: Rank) -> bool {
        self.cards.iter().all(|card| card.rank == rank)
    }

    /// Same cards regardless of order.
    pub fn same_cards(&self, cards: &[Card]) -> bool {
        if cards.len() != self.cards.len() {
            return false;
        }
        let mut sorted = cards.to_vec();
        sorted.sort();
        sorted == self.cards
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind, format_cards(&self.cards))
    }
}
