use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tienlen_bot::{Difficulty, GameContext, StrategyConfig, StrategyOverrides};
use tienlen_core::model::card::Card;
use tracing::Level;

const NAME_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root scenario configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub strategy: StrategySection,
    #[serde(default)]
    pub logging: LoggingConfig,
    pub scenarios: Vec<Scenario>,
}

impl ScenarioConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: ScenarioConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.logging.normalize()?;
        self.strategy.validate()?;
        validate_scenarios(&self.scenarios)?;
        Ok(())
    }

    /// Strategy in effect, falling back to `default` when no preset is named.
    pub fn resolved_strategy(&self, default: Difficulty) -> StrategyConfig {
        self.strategy.resolve(default)
    }
}

/// Preset selection plus partial overrides.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StrategySection {
    #[serde(default)]
    pub preset: Option<Difficulty>,
    #[serde(default)]
    pub overrides: StrategyOverrides,
}

impl StrategySection {
    pub fn resolve(&self, default: Difficulty) -> StrategyConfig {
        StrategyConfig::preset(self.preset.unwrap_or(default)).with_overrides(&self.overrides)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.resolve(Difficulty::default())
            .validate()
            .map_err(|err| ValidationError::InvalidField {
                field: "strategy.overrides".to_string(),
                message: err.to_string(),
            })
    }
}

/// One table position to hand to the bot.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub hand: Vec<Card>,
    #[serde(flatten)]
    pub context: GameContext,
}

impl Scenario {
    pub fn new(name: &str, description: &str, hand: Vec<Card>, context: GameContext) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            hand,
            context,
        }
    }
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    /// JSON lines go here instead of stderr when set.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) -> Result<(), ValidationError> {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
        if self.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!("unknown level '{}'", self.tracing_level),
            });
        }
        Ok(())
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_scenarios(scenarios: &[Scenario]) -> Result<(), ValidationError> {
    if scenarios.is_empty() {
        return Err(ValidationError::InvalidField {
            field: "scenarios".to_string(),
            message: "at least one scenario must be specified".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for scenario in scenarios {
        if scenario.name.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "scenarios.name".to_string(),
                message: "scenario name must not be empty".to_string(),
            });
        }

        if !scenario.name.chars().all(|c| NAME_ALLOWED.contains(c)) {
            return Err(ValidationError::InvalidField {
                field: format!("scenarios[{}].name", scenario.name),
                message: "scenario name may only contain alphanumeric characters, '.', '_' or '-'"
                    .to_string(),
            });
        }

        if !seen.insert(scenario.name.as_str()) {
            return Err(ValidationError::InvalidField {
                field: "scenarios".to_string(),
                message: format!("scenario '{}' defined more than once", scenario.name),
            });
        }

        for (label, cards) in [
            ("hand", &scenario.hand),
            ("last_played", &scenario.context.last_played),
        ] {
            if let Some(card) = first_repeat(cards) {
                return Err(ValidationError::InvalidField {
                    field: format!("scenarios[{}].{label}", scenario.name),
                    message: format!("card {card} appears more than once"),
                });
            }
        }
    }

    Ok(())
}

fn first_repeat(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::new();
    cards.iter().copied().find(|card| !seen.insert(*card))
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
