mod heuristic;

pub use heuristic::HeuristicPolicy;

use crate::bot::{Decision, GameContext};
use tienlen_core::model::card::Card;

/// Interface a turn driver uses to ask a non-human participant for a play.
pub trait Policy: Send {
    /// Name reported in logs.
    fn name(&self) -> &str;

    /// Choose a play or a pass for `hand` given the table in `ctx`.
    fn decide(&mut self, hand: &[Card], ctx: &GameContext) -> Decision;
}
