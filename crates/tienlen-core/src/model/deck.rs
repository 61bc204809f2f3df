use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 13;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deals the whole deck round-robin into four hands of thirteen.
    pub fn deal(&self) -> [Hand; PLAYERS] {
        let mut piles: [Vec<Card>; PLAYERS] = Default::default();
        for (i, card) in self.cards.iter().copied().enumerate() {
            piles[i % PLAYERS].push(card);
        }
        piles.map(Hand::with_cards)
    }
}

/// Seat holding the three of spades, who makes the opening play.
pub fn opening_seat(hands: &[Hand]) -> Option<usize> {
    hands
        .iter()
        .position(|hand| hand.contains(Card::THREE_OF_SPADES))
}
