use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single playing card. Ordering is rank first, suit second.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("invalid card code {0:?}: expected a rank symbol followed by a suit symbol")]
    InvalidCardCode(String),
}

impl Card {
    pub const THREE_OF_SPADES: Card = Card::new(Rank::Three, Suit::Spades);

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parses a two-character code such as `3S`, `0H` or `TH`.
    pub fn from_code(code: &str) -> Result<Self, CardError> {
        let invalid = || CardError::InvalidCardCode(code.to_string());
        let mut chars = code.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let rank = Rank::from_symbol(rank).ok_or_else(invalid)?;
        let suit = Suit::from_symbol(suit).ok_or_else(invalid)?;
        Ok(Self::new(rank, suit))
    }

    /// Canonical two-character code.
    pub fn code(self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.rank.symbol());
        code.push(self.suit.symbol());
        code
    }

    pub fn cmp_rank(self, other: Card) -> core::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }

    pub fn cmp_suit(self, other: Card) -> core::cmp::Ordering {
        self.suit.cmp(&other.suit)
    }

    /// Aces and twos.
    pub const fn is_power(self) -> bool {
        self.rank.is_power()
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_code(s.trim())
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.code()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit)
    }
}

/// Parses a list of codes separated by whitespace or commas.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(Card::from_code)
        .collect()
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.code())
        .collect::<Vec<_>>()
        .join(" ")
}
