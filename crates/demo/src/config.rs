//! Demo configuration, read from environment variables.

use core::num::ParseIntError;

use thiserror::Error;

use bookshop_core::{Clock, FixedClock, SystemClock};
use bookshop_observability::{LogFormat, UnknownLogFormat};

/// Freezes the year ages are computed against (e.g. `2024`).
pub const REFERENCE_YEAR_VAR: &str = "BOOKSHOP_REFERENCE_YEAR";
/// `json` (default) or `pretty`.
pub const LOG_FORMAT_VAR: &str = "BOOKSHOP_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be an integer year, got {value:?}")]
    InvalidYear {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{var}: {source}")]
    InvalidLogFormat {
        var: &'static str,
        #[source]
        source: UnknownLogFormat,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    /// `None` means "use the system clock".
    pub reference_year: Option<i32>,
    pub log_format: LogFormat,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unset and blank values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value_of = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let reference_year = value_of(REFERENCE_YEAR_VAR)
            .map(|value| {
                value
                    .trim()
                    .parse::<i32>()
                    .map_err(|source| ConfigError::InvalidYear {
                        var: REFERENCE_YEAR_VAR,
                        value,
                        source,
                    })
            })
            .transpose()?;

        let log_format = value_of(LOG_FORMAT_VAR)
            .map(|value| {
                value
                    .parse::<LogFormat>()
                    .map_err(|source| ConfigError::InvalidLogFormat {
                        var: LOG_FORMAT_VAR,
                        source,
                    })
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            reference_year,
            log_format,
        })
    }

    /// The clock ages are computed against.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.reference_year {
            Some(year) => Box::new(FixedClock(year)),
            None => Box::new(SystemClock),
        }
    }
}
