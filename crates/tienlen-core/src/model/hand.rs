use crate::model::card::Card;
use crate::model::rank::Rank;
use std::vec::Vec;

/// Cards held by one participant, kept in game order (rank, then suit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Removes every card of `play`; leaves the hand untouched if any is missing.
    pub fn remove_all(&mut self, play: &[Card]) -> bool {
        if !play.iter().all(|card| self.contains(*card)) {
            return false;
        }
        for card in play {
            self.remove(*card);
        }
        true
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    pub fn lowest(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Game order: rank first, suit breaking ties.
    pub fn by_value(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Display order: grouped by suit, ranked inside each suit.
    pub fn by_suit(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_by(|a, b| a.suit.cmp(&b.suit).then(a.rank.cmp(&b.rank)));
        cards
    }

    fn sort(&mut self) {
        self.cards.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn add_and_remove_cards() {
        let mut hand = Hand::new();
        let card = Card::new(Rank::Three, Suit::Clubs);
        hand.add(card);
        assert!(hand.contains(card));
        assert!(hand.remove(card));
        assert!(!hand.contains(card));
    }

    #[test]
    fn cards_are_sorted_by_rank_then_suit() {
        let mut hand = Hand::new();
        hand.add(Card::new(Rank::Two, Suit::Spades));
        hand.add(Card::new(Rank::Three, Suit::Hearts));
        hand.add(Card::new(Rank::Three, Suit::Spades));
        let ordered: Vec<_> = hand.iter().copied().collect();
        assert_eq!(ordered[0], Card::new(Rank::Three, Suit::Spades));
        assert_eq!(ordered[1], Card::new(Rank::Three, Suit::Hearts));
        assert_eq!(ordered[2], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(hand.lowest(), Some(Card::THREE_OF_SPADES));
    }

    #[test]
    fn by_suit_groups_spades_first() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Three, Suit::Hearts),
        ]);
        assert_eq!(
            hand.by_suit(),
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Three, Suit::Hearts),
                Card::new(Rank::Four, Suit::Hearts),
            ]
        );
    }

    #[test]
    fn remove_all_is_all_or_nothing() {
        let three = Card::new(Rank::Three, Suit::Clubs);
        let four = Card::new(Rank::Four, Suit::Clubs);
        let mut hand = Hand::with_cards(vec![three, four]);
        assert!(!hand.remove_all(&[three, Card::new(Rank::Five, Suit::Clubs)]));
        assert_eq!(hand.len(), 2);
        assert!(hand.remove_all(&[three, four]));
        assert!(hand.is_empty());
    }
}
