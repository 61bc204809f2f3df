use crate::model::card::Card;
use crate::model::deck::{Deck, opening_seat};
use crate::model::hand::Hand;
use serde::{Deserialize, Serialize};

/// A seeded deal, written with card codes so it can be replayed or diffed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealSnapshot {
    pub seed: u64,
    pub hands: Vec<Vec<Card>>,
    pub opening_seat: Option<usize>,
}

impl DealSnapshot {
    pub fn capture(seed: u64) -> Self {
        let hands = Deck::shuffled_with_seed(seed).deal();
        DealSnapshot {
            seed,
            opening_seat: opening_seat(&hands),
            hands: hands.iter().map(|hand| hand.cards().to_vec()).collect(),
        }
    }

    pub fn restore(&self) -> Vec<Hand> {
        self.hands
            .iter()
            .map(|cards| Hand::with_cards(cards.clone()))
            .collect()
    }

    /// True when re-dealing the seed reproduces the stored hands.
    pub fn matches_seed(&self) -> bool {
        *self == Self::capture(self.seed)
    }

    pub fn to_json(seed: u64) -> serde_json::Result<String> {
        let snapshot = Self::capture(seed);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
