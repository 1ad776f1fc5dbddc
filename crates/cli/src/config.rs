//! Process configuration from the environment.
//!
//! | variable                   | default | meaning                          |
//! |----------------------------|---------|----------------------------------|
//! | `PHARMADESK_LOG_FORMAT`    | `json`  | `json` or `pretty`               |
//! | `PHARMADESK_OUTPUT`        | `table` | default report format            |
//! | `PHARMADESK_DISPLAY_SCALE` | `2`     | decimal places for money (0..=6) |
//!
//! Unset variables fall back to the default; set-but-invalid ones are errors.

use core::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;

use pharmadesk_observability::LogFormat;
use pharmadesk_purchasing::DEFAULT_DISPLAY_SCALE;

pub const LOG_FORMAT_VAR: &str = "PHARMADESK_LOG_FORMAT";
pub const OUTPUT_VAR: &str = "PHARMADESK_OUTPUT";
pub const DISPLAY_SCALE_VAR: &str = "PHARMADESK_DISPLAY_SCALE";

const MAX_DISPLAY_SCALE: u32 = 6;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <OutputFormat as ValueEnum>::from_str(s.trim(), true)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub log_format: LogFormat,
    pub output: OutputFormat,
    pub display_scale: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            output: OutputFormat::Table,
            display_scale: DEFAULT_DISPLAY_SCALE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            config.log_format = value.parse().map_err(|e| ConfigError::Invalid {
                key: LOG_FORMAT_VAR,
                value: value.clone(),
                reason: format!("{e}"),
            })?;
        }

        if let Some(value) = lookup(OUTPUT_VAR) {
            config.output = value.parse().map_err(|reason| ConfigError::Invalid {
                key: OUTPUT_VAR,
                value: value.clone(),
                reason,
            })?;
        }

        if let Some(value) = lookup(DISPLAY_SCALE_VAR) {
            let scale: u32 = value.trim().parse().map_err(|e| ConfigError::Invalid {
                key: DISPLAY_SCALE_VAR,
                value: value.clone(),
                reason: format!("{e}"),
            })?;
            if scale > MAX_DISPLAY_SCALE {
                return Err(ConfigError::Invalid {
                    key: DISPLAY_SCALE_VAR,
                    value,
                    reason: format!("must be at most {MAX_DISPLAY_SCALE}"),
                });
            }
            config.display_scale = scale;
        }

        Ok(config)
    }
}
