use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric dials for the decision engine. Presets differ only in these
/// values; the algorithm is the same for every profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// 0..=1, scales every candidate score up.
    pub aggressiveness: f64,
    /// 0..=1, extra weight for plays of three or more cards.
    pub conservatism: f64,
    /// 0..=1, appetite for bombs.
    pub bomb_probability: f64,
    /// Score a response must exceed before the bot plays it.
    pub play_threshold: f64,
    /// Subtracted per ace or two spent while the hand is still large.
    pub power_card_penalty: f64,
    /// Added when a play leaves three cards or fewer.
    pub win_bonus: f64,
    /// 0..=1, attention paid to opponents' card counts.
    pub opponent_awareness: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            aggressiveness: 0.6,
            conservatism: 0.5,
            bomb_probability: 0.3,
            play_threshold: 35.0,
            power_card_penalty: 15.0,
            win_bonus: 30.0,
            opponent_awareness: 0.7,
        }
    }
}

impl StrategyConfig {
    pub fn preset(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Normal => Self::default(),
            Difficulty::Aggressive => Self {
                aggressiveness: 0.9,
                conservatism: 0.2,
                bomb_probability: 0.7,
                play_threshold: 25.0,
                power_card_penalty: 8.0,
                win_bonus: 40.0,
                opponent_awareness: 0.8,
            },
            Difficulty::Conservative => Self {
                aggressiveness: 0.3,
                conservatism: 0.8,
                bomb_probability: 0.1,
                play_threshold: 50.0,
                power_card_penalty: 25.0,
                win_bonus: 20.0,
                opponent_awareness: 0.9,
            },
            Difficulty::Smart => Self {
                aggressiveness: 0.7,
                conservatism: 0.6,
                bomb_probability: 0.4,
                play_threshold: 40.0,
                power_card_penalty: 12.0,
                win_bonus: 35.0,
                opponent_awareness: 1.0,
            },
            Difficulty::Beginner => Self {
                aggressiveness: 0.5,
                conservatism: 0.4,
                bomb_probability: 0.2,
                play_threshold: 30.0,
                power_card_penalty: 10.0,
                win_bonus: 25.0,
                opponent_awareness: 0.4,
            },
        }
    }

    /// Copy of `self` with every field present in `overrides` replaced.
    pub fn with_overrides(mut self, overrides: &StrategyOverrides) -> Self {
        let StrategyOverrides {
            aggressiveness,
            conservatism,
            bomb_probability,
            play_threshold,
            power_card_penalty,
            win_bonus,
            opponent_awareness,
        } = *overrides;
        if let Some(value) = aggressiveness {
            self.aggressiveness = value;
        }
        if let Some(value) = conservatism {
            self.conservatism = value;
        }
        if let Some(value) = bomb_probability {
            self.bomb_probability = value;
        }
        if let Some(value) = play_threshold {
            self.play_threshold = value;
        }
        if let Some(value) = power_card_penalty {
            self.power_card_penalty = value;
        }
        if let Some(value) = win_bonus {
            self.win_bonus = value;
        }
        if let Some(value) = opponent_awareness {
            self.opponent_awareness = value;
        }
        self
    }

    pub fn validate(&self) -> Result<(), StrategyError> {
        for (field, value) in [
            ("aggressiveness", self.aggressiveness),
            ("conservatism", self.conservatism),
            ("bomb_probability", self.bomb_probability),
            ("opponent_awareness", self.opponent_awareness),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(StrategyError::OutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("play_threshold", self.play_threshold),
            ("power_card_penalty", self.power_card_penalty),
            ("win_bonus", self.win_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StrategyError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

/// Partial configuration; `None` keeps the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyOverrides {
    #[serde(default)]
    pub aggressiveness: Option<f64>,
    #[serde(default)]
    pub conservatism: Option<f64>,
    #[serde(default)]
    pub bomb_probability: Option<f64>,
    #[serde(default)]
    pub play_threshold: Option<f64>,
    #[serde(default)]
    pub power_card_penalty: Option<f64>,
    #[serde(default)]
    pub win_bonus: Option<f64>,
    #[serde(default)]
    pub opponent_awareness: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrategyError {
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    #[default]
    Normal,
    Aggressive,
    Conservative,
    Smart,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?} (expected beginner, normal, aggressive, conservative or smart)")]
pub struct DifficultyParseError(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Beginner,
        Difficulty::Normal,
        Difficulty::Aggressive,
        Difficulty::Conservative,
        Difficulty::Smart,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Normal => "normal",
            Difficulty::Aggressive => "aggressive",
            Difficulty::Conservative => "conservative",
            Difficulty::Smart => "smart",
        }
    }

    /// Reads `TIENLEN_BOT_DIFFICULTY`, falling back to the default on
    /// missing or unknown values.
    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        read("TIENLEN_BOT_DIFFICULTY")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" | "easy" => Ok(Difficulty::Beginner),
            "normal" | "default" => Ok(Difficulty::Normal),
            "aggressive" => Ok(Difficulty::Aggressive),
            "conservative" => Ok(Difficulty::Conservative),
            "smart" | "hard" => Ok(Difficulty::Smart),
            _ => Err(DifficultyParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_preset_is_default() {
        assert_eq!(StrategyConfig::preset(Difficulty::Normal), StrategyConfig::default());
    }

    #[test]
    fn every_preset_validates() {
        for difficulty in Difficulty::ALL {
            StrategyConfig::preset(difficulty)
                .validate()
                .unwrap_or_else(|err| panic!("{difficulty}: {err}"));
        }
    }

    #[test]
    fn overrides_replace_only_present_fields() {
        let overrides = StrategyOverrides {
            play_threshold: Some(10.0),
            ..StrategyOverrides::default()
        };
        let config = StrategyConfig::default().with_overrides(&overrides);
        assert_eq!(config.play_threshold, 10.0);
        assert_eq!(config.win_bonus, StrategyConfig::default().win_bonus);
    }

    #[test]
    fn validate_rejects_out_of_range_dials() {
        let config = StrategyConfig {
            aggressiveness: 1.5,
            ..StrategyConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(StrategyError::OutOfRange {
                field: "aggressiveness",
                value: 1.5
            })
        );
        let config = StrategyConfig {
            win_bonus: f64::NAN,
            ..StrategyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn difficulty_parses_aliases() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!(" smart ".parse::<Difficulty>(), Ok(Difficulty::Smart));
        assert!("wild".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_reader_falls_back_to_default() {
        assert_eq!(Difficulty::from_reader(|_| None), Difficulty::Normal);
        assert_eq!(
            Difficulty::from_reader(|_| Some("aggressive".to_string())),
            Difficulty::Aggressive
        );
        assert_eq!(
            Difficulty::from_reader(|_| Some("???".to_string())),
            Difficulty::Normal
        );
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: StrategyConfig =
            serde_json::from_str(r#"{"play_threshold": 20.0}"#).expect("parse");
        assert_eq!(config.play_threshold, 20.0);
        assert_eq!(config.aggressiveness, 0.6);
        assert!(serde_json::from_str::<StrategyOverrides>(r#"{"bogus": 1}"#).is_err());
    }
}
