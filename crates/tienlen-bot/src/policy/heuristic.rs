use super::Policy;
use crate::bot::{
    Decision, Difficulty, GameContext, Stance, StrategyConfig, decide, determine_stance,
};
use tienlen_core::model::card::{Card, format_cards};
use tracing::{Level, event};

/// Heuristic bot driven by a fixed [`StrategyConfig`].
pub struct HeuristicPolicy {
    name: String,
    config: StrategyConfig,
}

impl HeuristicPolicy {
    pub fn new(name: impl Into<String>, config: StrategyConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.as_str(), StrategyConfig::preset(difficulty))
    }

    pub fn normal() -> Self {
        Self::with_difficulty(Difficulty::Normal)
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }
}

impl Policy for HeuristicPolicy {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, hand: &[Card], ctx: &GameContext) -> Decision {
        let decision = decide(hand, ctx, &self.config);
        let stance = determine_stance(hand.len(), ctx);
        log_decision(&self.name, hand, ctx, stance, &decision);
        decision
    }
}

fn log_decision(
    policy: &str,
    hand: &[Card],
    ctx: &GameContext,
    stance: Stance,
    decision: &Decision,
) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    let hand_preview = if hand.len() <= 13 {
        format_cards(hand)
    } else {
        format!("{} cards", hand.len())
    };
    let kind = decision.kind.map(|kind| kind.as_str()).unwrap_or("pass");

    event!(
        target: "tienlen_bot::decision",
        Level::INFO,
        policy,
        stance = ?stance,
        hand = %hand_preview,
        hand_size = hand.len(),
        table = %format_cards(&ctx.last_played),
        first_play = ctx.is_first_play,
        should_play = decision.should_play,
        kind,
        chosen = %format_cards(&decision.cards),
        confidence = decision.confidence,
        rationale = %decision.rationale,
    );
}
