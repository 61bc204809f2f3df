use serde::Serialize;
use tienlen_bot::{Decision, GameContext, Policy, Stance, determine_stance};
use tienlen_core::combo::{Combination, CombinationKind, find_all_combinations};
use tienlen_core::model::card::{Card, CardError, parse_cards};
use tienlen_core::model::deck::PLAYERS;

use crate::config::Scenario;

/// Acting counts replayed by [`card_count_sweep`].
pub const SWEEP_COUNTS: [usize; 5] = [13, 8, 5, 3, 1];
pub const SWEEP_HAND: &str = "4H 5D 6C 7S 8H 9D 0C JH";
pub const SWEEP_TARGET: &str = "3H";

const OPPONENT_COUNT: usize = 13;
const SWEEP_OPPONENT_COUNT: usize = 10;

/// The reference positions shipped with the harness.
pub fn builtin_scenarios() -> Result<Vec<Scenario>, CardError> {
    Ok(vec![
        scenario(
            "mandatory-three-of-spades",
            "Must play 3 of Spades on first turn",
            "3S 4H 5D 6C 7S 8H 9D 0C JH QS KD AC 2H",
            "",
            true,
        )?,
        scenario(
            "beating-single",
            "Beat a single 5 of Hearts",
            "4H 5D 6C 7S 8H 9D 0C JH QS KD AC 2H 2S",
            "5H",
            false,
        )?,
        scenario(
            "beating-pair",
            "Beat a pair of 7s",
            "4H 4D 6C 7S 8H 8D 0C JH QS QD AC 2H 2S",
            "7H 7D",
            false,
        )?,
        scenario(
            "bombing-single-two",
            "Use quad 4s to bomb a single 2",
            "4H 4D 4C 4S 6C 7S 8H 9D 0C JH QS KD AC",
            "2H",
            false,
        )?,
        scenario(
            "end-game",
            "End game with 3 cards left",
            "KD AC 2H",
            "QS",
            false,
        )?,
        scenario(
            "straight-play",
            "Hand with potential straights",
            "3H 4D 5C 6S 7H 8D 9C 0C JH QS KD AC 2H",
            "",
            false,
        )?,
    ])
}

fn scenario(
    name: &str,
    description: &str,
    hand: &str,
    last_played: &str,
    first_play: bool,
) -> Result<Scenario, CardError> {
    let hand = parse_cards(hand)?;
    let mut context = if first_play {
        GameContext::first_play()
    } else {
        GameContext::responding_to(parse_cards(last_played)?)
    };
    let mut counts = vec![OPPONENT_COUNT; PLAYERS];
    counts[0] = hand.len();
    context = context.with_counts(counts, 0);
    Ok(Scenario::new(name, description, hand, context))
}

/// One scenario's result as printed by the harness.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub description: String,
    pub stance: Stance,
    pub decision: Decision,
}

pub fn run_scenarios(policy: &mut dyn Policy, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    scenarios
        .iter()
        .map(|scenario| ScenarioOutcome {
            name: scenario.name.clone(),
            description: scenario.description.clone(),
            stance: determine_stance(scenario.hand.len(), &scenario.context),
            decision: policy.decide(&scenario.hand, &scenario.context),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub count: usize,
    pub decision: Decision,
}

/// Replays one response while the acting hand shrinks, showing how the
/// play threshold loosens as the count drops.
pub fn card_count_sweep(
    policy: &mut dyn Policy,
    hand: &[Card],
    target: &[Card],
    counts: &[usize],
) -> Vec<SweepRow> {
    counts
        .iter()
        .map(|&count| {
            let held = &hand[..count.min(hand.len())];
            let mut table = vec![SWEEP_OPPONENT_COUNT; PLAYERS];
            table[0] = count;
            let ctx = GameContext::responding_to(target.to_vec()).with_counts(table, 0);
            SweepRow {
                count,
                decision: policy.decide(held, &ctx),
            }
        })
        .collect()
}

/// Every combination in `hand`, grouped by kind in enumeration order.
pub fn analyze_hand(hand: &[Card]) -> Vec<(CombinationKind, Vec<Combination>)> {
    let combos = find_all_combinations(hand);
    CombinationKind::ALL
        .iter()
        .map(|&kind| {
            let group: Vec<Combination> = combos
                .iter()
                .filter(|combo| combo.kind() == kind)
                .cloned()
                .collect();
            (kind, group)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect()
}
