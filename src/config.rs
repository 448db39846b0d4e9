//! Board configuration.
//!
//! A browser bundle has no process environment, so values are captured at
//! compile time with `option_env!` and parsed by `from_lookup`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_FEEDBACK_TIMEOUT_MS: u64 = 5000;

const API_BASE_VAR: &str = "ACTIVITY_BOARD_API_BASE";
const FEEDBACK_MS_VAR: &str = "ACTIVITY_BOARD_FEEDBACK_MS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A value was present but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    /// How long a feedback message stays visible.
    pub feedback_timeout: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            feedback_timeout: Duration::from_millis(DEFAULT_FEEDBACK_TIMEOUT_MS),
        }
    }
}

impl BoardConfig {
    /// Build config from a variable lookup.
    ///
    /// Optional:
    /// - `ACTIVITY_BOARD_API_BASE`: default same origin; trailing `/` trimmed
    /// - `ACTIVITY_BOARD_FEEDBACK_MS`: default 5000, must be non-zero
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup(API_BASE_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .unwrap_or_default();

        let feedback_timeout = match lookup(FEEDBACK_MS_VAR) {
            None => Duration::from_millis(DEFAULT_FEEDBACK_TIMEOUT_MS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::Invalid { var: FEEDBACK_MS_VAR, value: raw }),
            },
        };

        Ok(Self { api_base, feedback_timeout })
    }

    /// Build config from values baked in at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            let value = match var {
                API_BASE_VAR => option_env!("ACTIVITY_BOARD_API_BASE"),
                FEEDBACK_MS_VAR => option_env!("ACTIVITY_BOARD_FEEDBACK_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }
}
