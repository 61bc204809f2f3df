use super::Decision;
use tienlen_core::combo::{Combination, CombinationKind, classify, find_all_combinations};
use tienlen_core::model::card::Card;
use tienlen_core::model::rank::Rank;

/// Highest rank treated as a low card worth shedding on a free lead.
const LOW_RANK: Rank = Rank::Four;
/// Highest rank for a "conservative" single lead.
const MID_RANK: Rank = Rank::Jack;

pub struct OpeningPlanner;

impl OpeningPlanner {
    /// Opening play of a match, which must contain the three of spades.
    pub fn with_three_of_spades(hand: &[Card]) -> Decision {
        if !hand.contains(&Card::THREE_OF_SPADES) {
            return Decision::pass(0.0, "cannot open: three of spades not in hand");
        }

        let with_three: Vec<Combination> = find_all_combinations(hand)
            .into_iter()
            .filter(|combo| combo.contains(Card::THREE_OF_SPADES))
            .collect();

        if let Some(combo) = largest_non_single(with_three) {
            let rationale = format!("playing {} including three of spades", combo.kind());
            return Decision::play(combo, 0.8, rationale);
        }

        match classify(&[Card::THREE_OF_SPADES]) {
            Some(single) => Decision::play(single, 1.0, "playing mandatory three of spades"),
            None => Decision::pass(0.0, "cannot open: three of spades not in hand"),
        }
    }

    /// Free lead: shed low combinations first, otherwise the lowest single.
    pub fn free_lead(hand: &[Card]) -> Decision {
        let Some(lowest) = hand.iter().copied().min() else {
            return Decision::pass(0.0, "cannot lead: hand is empty");
        };

        let low_cards: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|card| card.rank <= LOW_RANK)
            .collect();
        if let Some(combo) = largest_non_single(find_all_combinations(&low_cards)) {
            let rationale = format!("opening with low {}", combo.kind());
            return Decision::play(combo, 0.7, rationale);
        }

        let (confidence, rationale) = if lowest.rank <= LOW_RANK {
            (0.6, "opening with lowest card")
        } else if lowest.rank <= MID_RANK {
            (0.5, "conservative opening play")
        } else {
            (0.3, "playing lowest available card")
        };
        match classify(&[lowest]) {
            Some(single) => Decision::play(single, confidence, rationale),
            None => Decision::pass(0.0, "cannot lead: hand is empty"),
        }
    }
}

/// Largest non-single combination; the earliest one wins ties.
fn largest_non_single(combos: Vec<Combination>) -> Option<Combination> {
    combos
        .into_iter()
        .filter(|combo| combo.kind() != CombinationKind::Single)
        .fold(None, |best: Option<Combination>, combo| match best {
            Some(best) if best.len() >= combo.len() => Some(best),
            _ => Some(combo),
        })
}

#[cfg(test)]
mod tests {
    use super::OpeningPlanner;
    use tienlen_core::combo::CombinationKind;
    use tienlen_core::model::card::{Card, format_cards, parse_cards};

    fn hand(codes: &str) -> Vec<Card> {
        parse_cards(codes).unwrap()
    }

    #[test]
    fn lone_three_of_spades_is_played_alone() {
        let decision = OpeningPlanner::with_three_of_spades(&hand("3S 4S 9H KD"));
        assert!(decision.should_play);
        assert_eq!(decision.cards, vec![Card::THREE_OF_SPADES]);
        assert_eq!(decision.confidence, 1.0);
    }

    #[test]
    fn three_of_spades_joins_the_largest_combination() {
        let decision = OpeningPlanner::with_three_of_spades(&hand("3S 4C 5D 6S 9H"));
        assert!(decision.should_play);
        assert_eq!(decision.kind, Some(CombinationKind::Straight));
        assert_eq!(format_cards(&decision.cards), "3S 4C 5D 6S");
        assert_eq!(decision.confidence, 0.8);
    }

    #[test]
    fn straights_built_on_a_higher_three_leave_the_spade_out() {
        let decision = OpeningPlanner::with_three_of_spades(&hand("3S 3H 4C 5D 6S"));
        assert_eq!(decision.kind, Some(CombinationKind::Pair));
        assert_eq!(format_cards(&decision.cards), "3S 3H");
    }

    #[test]
    fn three_of_spades_prefers_triple_over_pair() {
        let decision = OpeningPlanner::with_three_of_spades(&hand("3S 3C 3D 8H"));
        assert_eq!(decision.kind, Some(CombinationKind::Triple));
        assert!(decision.cards.contains(&Card::THREE_OF_SPADES));
    }

    #[test]
    fn missing_three_of_spades_does_not_play() {
        let decision = OpeningPlanner::with_three_of_spades(&hand("3H 4S"));
        assert!(!decision.should_play);
        assert!(decision.cards.is_empty());
        assert_eq!(decision.confidence, 0.0);
    }

    #[test]
    fn free_lead_sheds_low_pair() {
        let decision = OpeningPlanner::free_lead(&hand("4S 4H 7C 9D KD"));
        assert_eq!(decision.kind, Some(CombinationKind::Pair));
        assert_eq!(format_cards(&decision.cards), "4S 4H");
        assert_eq!(decision.confidence, 0.7);
    }

    #[test]
    fn free_lead_falls_back_to_lowest_single() {
        let decision = OpeningPlanner::free_lead(&hand("9D 6C 6S KD"));
        assert_eq!(decision.cards, hand("6S"));
        assert_eq!(decision.confidence, 0.5);

        let decision = OpeningPlanner::free_lead(&hand("2D AS QC"));
        assert_eq!(decision.cards, hand("QC"));
        assert_eq!(decision.confidence, 0.3);

        let decision = OpeningPlanner::free_lead(&hand("3D 4S 8C"));
        assert_eq!(decision.cards, hand("3D"));
        assert_eq!(decision.confidence, 0.6);
    }

    #[test]
    fn empty_hand_cannot_lead() {
        let decision = OpeningPlanner::free_lead(&[]);
        assert!(!decision.should_play);
        assert_eq!(decision.confidence, 0.0);
    }
}
