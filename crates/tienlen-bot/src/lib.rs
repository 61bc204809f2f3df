pub mod bot;
pub mod policy;

pub use bot::{
    Decision, Difficulty, GameContext, OpeningPlanner, ResponsePlanner, Stance, StrategyConfig,
    StrategyOverrides, decide, determine_stance,
};
pub use policy::{HeuristicPolicy, Policy};
