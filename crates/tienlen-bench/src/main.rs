use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tienlen_bench::config::{LoggingConfig, ScenarioConfig};
use tienlen_bench::logging::init_logging;
use tienlen_bench::scenarios::{
    SWEEP_COUNTS, SWEEP_HAND, SWEEP_TARGET, ScenarioOutcome, analyze_hand, builtin_scenarios,
    card_count_sweep, run_scenarios,
};
use tienlen_bot::{Decision, Difficulty, GameContext, HeuristicPolicy, Policy, StrategyConfig};
use tienlen_core::game::DealSnapshot;
use tienlen_core::model::card::{format_cards, parse_cards};
use tienlen_core::model::deck::{HAND_SIZE, PLAYERS};

/// Scenario harness for the Tiến Lên bot.
#[derive(Debug, Parser)]
#[command(
    name = "tienlen-bench",
    author,
    version,
    about = "Inspect hands and replay bot decisions"
)]
struct Cli {
    /// Strategy preset (beginner, normal, aggressive, conservative, smart).
    /// Falls back to TIENLEN_BOT_DIFFICULTY, then normal.
    #[arg(short, long, global = true, value_name = "PRESET")]
    difficulty: Option<Difficulty>,

    /// Emit structured decision logs at this level regardless of config.
    #[arg(long, global = true, value_name = "LEVEL")]
    trace_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every combination in a hand, grouped by kind.
    Analyze {
        /// Card codes separated by spaces or commas, e.g. "3S 4S 5S 0H".
        #[arg(long, value_name = "CODES")]
        hand: String,
    },
    /// Run scenarios from a YAML file, or the built-in set.
    Decide {
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print one JSON object per scenario.
        #[arg(long)]
        json: bool,
    },
    /// Replay one response at shrinking hand sizes.
    Sweep {
        #[arg(long, value_name = "CODES", default_value = SWEEP_HAND)]
        hand: String,

        #[arg(long, value_name = "CODES", default_value = SWEEP_TARGET)]
        target: String,

        #[arg(long)]
        json: bool,
    },
    /// Deal four hands from a seeded deck.
    Deal {
        #[arg(long, value_name = "SEED")]
        seed: u64,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let difficulty = cli.difficulty.unwrap_or_else(Difficulty::from_env);

    match cli.command {
        Command::Analyze { hand } => analyze(&hand),
        Command::Decide { config, json } => {
            decide(config, difficulty, cli.trace_level.as_deref(), json)
        }
        Command::Sweep { hand, target, json } => {
            let _logging_guard = init_logging(&cli_logging(cli.trace_level.as_deref()))?;
            sweep(&hand, &target, difficulty, json)
        }
        Command::Deal { seed, json } => {
            let _logging_guard = init_logging(&cli_logging(cli.trace_level.as_deref()))?;
            deal(seed, difficulty, json)
        }
    }
}

fn cli_logging(trace_level: Option<&str>) -> LoggingConfig {
    let mut logging = LoggingConfig::default();
    apply_trace_level(&mut logging, trace_level);
    logging
}

fn apply_trace_level(logging: &mut LoggingConfig, trace_level: Option<&str>) {
    if let Some(level) = trace_level {
        logging.enable_structured = true;
        logging.tracing_level = level.to_string();
    }
}

fn analyze(hand: &str) -> Result<()> {
    let cards = parse_cards(hand)?;
    println!("Hand: {}", format_cards(&cards));
    let groups = analyze_hand(&cards);
    if groups.is_empty() {
        println!("No combinations.");
        return Ok(());
    }
    for (kind, combos) in groups {
        println!("{} ({})", kind.as_str(), combos.len());
        for combo in combos {
            println!(
                "  {:<30} strength {}",
                format_cards(combo.cards()),
                combo.strength().value()
            );
        }
    }
    Ok(())
}

fn decide(
    config_path: Option<PathBuf>,
    difficulty: Difficulty,
    trace_level: Option<&str>,
    json: bool,
) -> Result<()> {
    let (strategy, mut logging, scenarios) = match config_path {
        Some(path) => {
            let config = ScenarioConfig::from_path(&path)?;
            (
                config.resolved_strategy(difficulty),
                config.logging,
                config.scenarios,
            )
        }
        None => (
            StrategyConfig::preset(difficulty),
            LoggingConfig::default(),
            builtin_scenarios()?,
        ),
    };
    apply_trace_level(&mut logging, trace_level);
    let _logging_guard = init_logging(&logging)?;

    let mut policy = HeuristicPolicy::new(difficulty.as_str(), strategy);
    for outcome in run_scenarios(&mut policy, &scenarios) {
        if json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            print_outcome(&outcome);
        }
    }
    Ok(())
}

fn print_outcome(outcome: &ScenarioOutcome) {
    if outcome.description.is_empty() {
        println!("[{}]", outcome.name);
    } else {
        println!("[{}] {}", outcome.name, outcome.description);
    }
    println!("  stance: {:?}", outcome.stance);
    println!("  {}", describe(&outcome.decision));
}

fn describe(decision: &Decision) -> String {
    let action = match decision.kind {
        Some(kind) if decision.should_play => {
            format!("PLAY {} {}", kind.as_str(), format_cards(&decision.cards))
        }
        _ => "PASS".to_string(),
    };
    format!(
        "{action} (confidence {:.2}): {}",
        decision.confidence, decision.rationale
    )
}

fn sweep(hand: &str, target: &str, difficulty: Difficulty, json: bool) -> Result<()> {
    let hand = parse_cards(hand).context("parsing --hand")?;
    let target = parse_cards(target).context("parsing --target")?;
    let mut policy = HeuristicPolicy::with_difficulty(difficulty);
    if !json {
        println!(
            "Responding to {} with {} ({})",
            format_cards(&target),
            format_cards(&hand),
            policy.name()
        );
    }
    for row in card_count_sweep(&mut policy, &hand, &target, &SWEEP_COUNTS) {
        if json {
            println!("{}", serde_json::to_string(&row)?);
        } else {
            println!("{:>2} cards: {}", row.count, describe(&row.decision));
        }
    }
    Ok(())
}

fn deal(seed: u64, difficulty: Difficulty, json: bool) -> Result<()> {
    let snapshot = DealSnapshot::capture(seed);
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Seed {seed}");
    for (seat, cards) in snapshot.hands.iter().enumerate() {
        println!("  seat {seat}: {}", format_cards(cards));
    }
    let Some(opener) = snapshot.opening_seat else {
        println!("No seat holds the 3 of Spades.");
        return Ok(());
    };
    println!("Opening seat: {opener}");

    let ctx = GameContext::first_play().with_counts(vec![HAND_SIZE; PLAYERS], opener);
    let mut policy = HeuristicPolicy::with_difficulty(difficulty);
    println!(
        "  opener plays: {}",
        describe(&policy.decide(&snapshot.hands[opener], &ctx))
    );
    Ok(())
}
