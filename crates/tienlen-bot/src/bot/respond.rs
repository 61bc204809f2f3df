use super::scoring::{play_threshold, score_candidate};
use super::{Decision, GameContext, StrategyConfig};
use tienlen_core::combo::{Combination, can_beat, classify, find_all_combinations};
use tienlen_core::model::card::{Card, format_cards};
use tracing::{Level, event};

/// Hands larger than this hold back when an opponent is nearly out.
const CONSERVE_ABOVE: usize = 6;

pub struct ResponsePlanner;

impl ResponsePlanner {
    /// Answer the play on the table: beat it with the best-scoring
    /// candidate, or pass.
    pub fn respond(hand: &[Card], ctx: &GameContext, config: &StrategyConfig) -> Decision {
        let Some(target) = classify(&ctx.last_played) else {
            return Decision::pass(0.0, "cannot determine target combination");
        };

        let candidates = Self::beating_candidates(hand, &target);
        let Some((best, score)) = Self::best_scored(candidates, hand.len(), config) else {
            return Self::pass_decision(hand.len(), ctx);
        };

        let threshold = play_threshold(ctx.acting_count(hand.len()), config);
        if score > threshold {
            let rationale = format!("playing {} (score: {})", best.kind(), score.round());
            return Decision::play(best, score / 100.0, rationale);
        }
        Self::pass_decision(hand.len(), ctx)
    }

    /// Every combination in `hand` that legally beats `target`.
    pub fn beating_candidates(hand: &[Card], target: &Combination) -> Vec<Combination> {
        find_all_combinations(hand)
            .into_iter()
            .filter(|combo| can_beat(combo, target))
            .collect()
    }

    /// Pass is always legal; it reads as conservation when an opponent is
    /// about to go out and this hand is still large.
    pub fn pass_decision(hand_len: usize, ctx: &GameContext) -> Decision {
        if ctx.others_near_win() && ctx.acting_count(hand_len) > CONSERVE_ABOVE {
            return Decision::pass(
                0.7,
                "passing - conserving cards while others are close to winning",
            );
        }
        Decision::pass(0.5, "passing - no good plays available")
    }

    /// Highest score wins; the earliest candidate wins ties.
    fn best_scored(
        candidates: Vec<Combination>,
        hand_len: usize,
        config: &StrategyConfig,
    ) -> Option<(Combination, f64)> {
        let mut best: Option<(Combination, f64)> = None;
        for combo in candidates {
            let score = score_candidate(&combo, hand_len, config);
            if tracing::enabled!(Level::TRACE) {
                event!(
                    target: "tienlen_bot::scoring",
                    Level::TRACE,
                    kind = %combo.kind(),
                    cards = %format_cards(combo.cards()),
                    score,
                );
            }
            match &best {
                Some((_, best_score)) if *best_score >= score => {}
                _ => best = Some((combo, score)),
            }
        }
        best
    }
}
