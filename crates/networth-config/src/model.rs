use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

const RANGE_TOKENS: [&str; 5] = ["1A", "3A", "5A", "Todo", "all"];

/// Stores user-configurable projection preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_horizon_years")]
    pub horizon_years: i32,
    #[serde(default = "Config::default_goal_net_worth")]
    pub goal_net_worth: f64,
    #[serde(default = "Config::default_starting_balance")]
    pub starting_balance: f64,
    #[serde(default = "Config::default_range_value")]
    pub default_range: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            horizon_years: Self::default_horizon_years(),
            goal_net_worth: Self::default_goal_net_worth(),
            starting_balance: Self::default_starting_balance(),
            default_range: Self::default_range_value(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "es-ES".into()
    }

    pub fn default_currency() -> String {
        "EUR".into()
    }

    pub fn default_horizon_years() -> i32 {
        15
    }

    pub fn default_goal_net_worth() -> f64 {
        100_000.0
    }

    pub fn default_starting_balance() -> f64 {
        7500.0
    }

    pub fn default_range_value() -> String {
        "1A".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Directory the CLI stores its files under when none is given.
    pub fn default_base_dir() -> PathBuf {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("networth")
    }

    /// Keys accepted by [`Config::set_value`].
    pub fn keys() -> &'static [&'static str] {
        &[
            "locale",
            "currency",
            "horizon_years",
            "goal_net_worth",
            "starting_balance",
            "default_range",
            "ui_color_enabled",
        ]
    }

    /// Assigns a field from its textual form, as typed on the command line.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let trimmed = value.trim();
        match key {
            "locale" => {
                if trimmed.is_empty() {
                    return Err(invalid());
                }
                self.locale = trimmed.to_string();
            }
            "currency" => {
                if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(invalid());
                }
                self.currency = trimmed.to_ascii_uppercase();
            }
            "horizon_years" => {
                self.horizon_years = trimmed.parse().map_err(|_| invalid())?;
            }
            "goal_net_worth" => {
                self.goal_net_worth = parse_finite(trimmed).ok_or_else(invalid)?;
            }
            "starting_balance" => {
                self.starting_balance = parse_finite(trimmed).ok_or_else(invalid)?;
            }
            "default_range" => {
                let token = RANGE_TOKENS
                    .iter()
                    .find(|token| token.eq_ignore_ascii_case(trimmed))
                    .ok_or_else(invalid)?;
                self.default_range = (*token).to_string();
            }
            "ui_color_enabled" => {
                self.ui_color_enabled = match trimmed.to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => return Err(invalid()),
                };
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
