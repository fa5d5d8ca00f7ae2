//! Core configuration.
//!
//! # Responsibility
//! - Hold defaults applied to newly created activities.
//! - Carry the preferred log level for hosts that bootstrap logging.
//!
//! # Invariants
//! - A validated config always yields activities whose time passes
//!   `Activity::validate()`.
//! - Missing JSON keys fall back to `ItineraryConfig::default()`.

use crate::logging::{default_log_level, normalize_level};
use crate::model::activity::is_valid_time_of_day;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Time assigned to a freshly added activity.
pub const DEFAULT_ACTIVITY_TIME: &str = "12:00";
/// Placeholder title assigned to a freshly added activity.
pub const DEFAULT_ACTIVITY_TITLE: &str = "New Activity";

/// Errors from config parsing and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// Input is not valid config JSON.
    Parse(serde_json::Error),
    /// `default_activity_time` is not `HH:MM`.
    InvalidDefaultTime(String),
    /// `default_activity_title` is blank after trim.
    BlankDefaultTitle,
    /// `log_level` is not a supported level name.
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::InvalidDefaultTime(value) => {
                write!(f, "default_activity_time `{value}` must be HH:MM")
            }
            Self::BlankDefaultTitle => write!(f, "default_activity_title must not be blank"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Itinerary core settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryConfig {
    pub default_activity_time: String,
    pub default_activity_title: String,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self {
            default_activity_time: DEFAULT_ACTIVITY_TIME.to_string(),
            default_activity_title: DEFAULT_ACTIVITY_TITLE.to_string(),
            log_level: default_log_level().to_string(),
        }
    }
}

impl ItineraryConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_time_of_day(self.default_activity_time.as_str()) {
            return Err(ConfigError::InvalidDefaultTime(
                self.default_activity_time.clone(),
            ));
        }
        if self.default_activity_title.trim().is_empty() {
            return Err(ConfigError::BlankDefaultTitle);
        }
        normalize_level(self.log_level.as_str()).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }
}
