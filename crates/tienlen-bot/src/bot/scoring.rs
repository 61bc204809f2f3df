use super::StrategyConfig;
use tienlen_core::combo::{Combination, CombinationKind};
use tienlen_core::model::rank::Rank;

const CARD_SHED_WEIGHT: f64 = 5.0;
const LOW_RANK_WEIGHT: f64 = 2.0;
const WIN_BONUS_CARDS_LEFT: usize = 3;
const POWER_PENALTY_MIN_HAND: usize = 6;

fn kind_base(kind: CombinationKind) -> f64 {
    match kind {
        CombinationKind::Single => 10.0,
        CombinationKind::Pair => 20.0,
        CombinationKind::Straight => 30.0,
        CombinationKind::Triple => 35.0,
        CombinationKind::DoubleStraight => 40.0,
        CombinationKind::Quad => 50.0,
    }
}

/// Heuristic value of playing `combo` from a hand of `hand_len` cards.
/// Higher is better; the result may be negative.
pub fn score_candidate(combo: &Combination, hand_len: usize, config: &StrategyConfig) -> f64 {
    let cards = combo.cards();
    let count = cards.len();
    let mut score = kind_base(combo.kind());

    score += count as f64 * CARD_SHED_WEIGHT;

    let average_rank =
        cards.iter().map(|card| card.rank.index() as f64).sum::<f64>() / count.max(1) as f64;
    score += (Rank::ORDERED.len() as f64 - average_rank) * LOW_RANK_WEIGHT;

    if hand_len.saturating_sub(count) <= WIN_BONUS_CARDS_LEFT {
        score += config.win_bonus;
    }

    let power_cards = cards.iter().filter(|card| card.is_power()).count();
    if hand_len > POWER_PENALTY_MIN_HAND && power_cards > 0 {
        score -= power_cards as f64 * config.power_card_penalty;
    }

    score *= 1.0 + config.aggressiveness * 0.3;
    if count > 2 {
        score *= 1.0 + config.conservatism * 0.2;
    }
    score
}

/// Score a response must exceed: lower when the acting hand is nearly
/// empty, higher while it is still large.
pub fn play_threshold(acting_count: usize, config: &StrategyConfig) -> f64 {
    if acting_count <= 4 {
        config.play_threshold * 0.6
    } else if acting_count > 8 {
        config.play_threshold * 1.4
    } else {
        config.play_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tienlen_core::combo::classify;
    use tienlen_core::model::card::parse_cards;

    fn combo(codes: &str) -> Combination {
        classify(&parse_cards(codes).unwrap()).unwrap()
    }

    fn neutral() -> StrategyConfig {
        StrategyConfig {
            aggressiveness: 0.0,
            conservatism: 0.0,
            ..StrategyConfig::default()
        }
    }

    #[test]
    fn single_three_in_full_hand() {
        // 10 base + 5 shed + (13 - 0) * 2
        let score = score_candidate(&combo("3S"), 13, &neutral());
        assert!((score - 41.0).abs() < 1e-9);
    }

    #[test]
    fn power_cards_are_penalised_while_hand_is_large() {
        // 10 + 5 + (13 - 12) * 2 - 15
        let score = score_candidate(&combo("2H"), 13, &neutral());
        assert!((score - 2.0).abs() < 1e-9);
        // same card with 6 in hand: no penalty
        let score = score_candidate(&combo("2H"), 6, &neutral());
        assert!((score - 17.0).abs() < 1e-9);
    }

    #[test]
    fn win_bonus_when_few_cards_remain() {
        let config = neutral();
        let base = score_candidate(&combo("9S 9H"), 13, &config);
        let near = score_candidate(&combo("9S 9H"), 5, &config);
        assert!((near - base - config.win_bonus).abs() < 1e-9);
    }

    #[test]
    fn modifiers_scale_scores() {
        let config = StrategyConfig::default();
        let quad = score_candidate(&combo("4S 4C 4D 4H"), 13, &config);
        // (50 + 20 + (13 - 1) * 2) * 1.18 * 1.1
        assert!((quad - 94.0 * 1.18 * 1.1).abs() < 1e-9);
        let pair = score_candidate(&combo("4S 4C"), 13, &config);
        assert!((pair - (20.0 + 10.0 + 24.0) * 1.18).abs() < 1e-9);
    }

    #[test]
    fn threshold_moves_with_hand_size() {
        let config = StrategyConfig::default();
        assert!((play_threshold(4, &config) - 21.0).abs() < 1e-9);
        assert!((play_threshold(8, &config) - 35.0).abs() < 1e-9);
        assert!((play_threshold(9, &config) - 49.0).abs() < 1e-9);
    }
}
