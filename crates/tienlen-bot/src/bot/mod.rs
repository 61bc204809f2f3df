mod opening;
mod params;
mod respond;
mod scoring;

pub use opening::OpeningPlanner;
pub use params::{Difficulty, DifficultyParseError, StrategyConfig, StrategyError, StrategyOverrides};
pub use respond::ResponsePlanner;
pub use scoring::{play_threshold, score_candidate};

use serde::{Deserialize, Serialize};
use tienlen_core::combo::{Combination, CombinationKind};
use tienlen_core::model::card::Card;

/// Cards at or below which another participant counts as close to winning.
pub(crate) const NEAR_WIN_CARDS: usize = 3;

/// The bot's reading of the table, reported alongside each decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Aggressive,
    Conservative,
    Defensive,
}

/// Snapshot of the table supplied by the turn driver for one decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameContext {
    /// Cards of the play to beat; empty when nobody has played yet.
    pub last_played: Vec<Card>,
    pub is_first_play: bool,
    pub must_include_three_of_spades: bool,
    /// Cards left for every participant, indexed by seat.
    pub player_card_counts: Vec<usize>,
    /// Seat of the acting participant within `player_card_counts`.
    pub current_player: usize,
}

impl GameContext {
    /// The opening play of a match, which must include the three of spades.
    pub fn first_play() -> Self {
        Self {
            is_first_play: true,
            must_include_three_of_spades: true,
            ..Self::default()
        }
    }

    /// A fresh lead with nothing on the table.
    pub fn lead() -> Self {
        Self::default()
    }

    pub fn responding_to(last_played: Vec<Card>) -> Self {
        Self {
            last_played,
            ..Self::default()
        }
    }

    pub fn with_counts(mut self, counts: Vec<usize>, current_player: usize) -> Self {
        self.player_card_counts = counts;
        self.current_player = current_player;
        self
    }

    /// Cards held by the acting participant; falls back to `hand_len` when
    /// the counts do not cover the acting seat.
    pub fn acting_count(&self, hand_len: usize) -> usize {
        self.player_card_counts
            .get(self.current_player)
            .copied()
            .unwrap_or(hand_len)
    }

    pub fn others_near_win(&self) -> bool {
        self.player_card_counts
            .iter()
            .enumerate()
            .any(|(seat, &count)| seat != self.current_player && count <= NEAR_WIN_CARDS)
    }

    pub(crate) fn is_constrained_opening(&self) -> bool {
        self.is_first_play && self.must_include_three_of_spades
    }
}

/// Outcome of one call to [`decide`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub should_play: bool,
    pub cards: Vec<Card>,
    pub kind: Option<CombinationKind>,
    /// 0..=1.
    pub confidence: f64,
    pub rationale: String,
}

impl Decision {
    pub fn play(combo: Combination, confidence: f64, rationale: impl Into<String>) -> Self {
        Self {
            should_play: true,
            kind: Some(combo.kind()),
            cards: combo.into_cards(),
            confidence: confidence.clamp(0.0, 1.0),
            rationale: rationale.into(),
        }
    }

    pub fn pass(confidence: f64, rationale: impl Into<String>) -> Self {
        Self {
            should_play: false,
            cards: Vec::new(),
            kind: None,
            confidence: confidence.clamp(0.0, 1.0),
            rationale: rationale.into(),
        }
    }
}

/// Chooses a play (or a pass) for `hand` given the table in `ctx`.
///
/// Pure: the same inputs always give the same decision. Caller mistakes
/// such as an empty hand on a mandatory lead come back as a non-playing
/// decision with zero confidence.
pub fn decide(hand: &[Card], ctx: &GameContext, config: &StrategyConfig) -> Decision {
    if ctx.is_constrained_opening() {
        return OpeningPlanner::with_three_of_spades(hand);
    }
    if ctx.last_played.is_empty() {
        return OpeningPlanner::free_lead(hand);
    }
    ResponsePlanner::respond(hand, ctx, config)
}

pub fn determine_stance(hand_len: usize, ctx: &GameContext) -> Stance {
    if ctx.acting_count(hand_len) <= 5 {
        return Stance::Aggressive;
    }
    if ctx.others_near_win() {
        return Stance::Defensive;
    }
    Stance::Conservative
}

#[cfg(test)]
mod tests {
    use super::*;
    use tienlen_core::model::card::parse_cards;

    #[test]
    fn acting_count_falls_back_to_hand_size() {
        let ctx = GameContext::lead();
        assert_eq!(ctx.acting_count(9), 9);
        let ctx = ctx.with_counts(vec![13, 7, 2, 11], 1);
        assert_eq!(ctx.acting_count(9), 7);
        assert!(ctx.others_near_win());
    }

    #[test]
    fn acting_seat_is_not_counted_as_near_win() {
        let ctx = GameContext::lead().with_counts(vec![2, 10, 10, 10], 0);
        assert!(!ctx.others_near_win());
    }

    #[test]
    fn stance_tracks_table_state() {
        let ctx = GameContext::lead().with_counts(vec![4, 10, 10, 10], 0);
        assert_eq!(determine_stance(4, &ctx), Stance::Aggressive);
        let ctx = GameContext::lead().with_counts(vec![10, 3, 10, 10], 0);
        assert_eq!(determine_stance(10, &ctx), Stance::Defensive);
        let ctx = GameContext::lead().with_counts(vec![10, 10, 10, 10], 0);
        assert_eq!(determine_stance(10, &ctx), Stance::Conservative);
    }

    #[test]
    fn decide_routes_constrained_opening_first() {
        let hand = parse_cards("3S 4S 9H").unwrap();
        let mut ctx = GameContext::first_play();
        ctx.last_played = parse_cards("5H").unwrap();
        let decision = decide(&hand, &ctx, &StrategyConfig::default());
        assert!(decision.should_play);
        assert_eq!(decision.cards, vec![Card::THREE_OF_SPADES]);
    }

    #[test]
    fn pass_has_no_cards() {
        let decision = Decision::pass(2.0, "nothing");
        assert!(!decision.should_play);
        assert!(decision.cards.is_empty());
        assert_eq!(decision.confidence, 1.0);
    }
}
