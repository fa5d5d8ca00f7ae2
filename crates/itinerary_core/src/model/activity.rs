//! Activity domain model.
//!
//! # Responsibility
//! - Define one scheduled entry of a day (time, title, location, notes).
//! - Provide field-level editing used by the edit-target flow.
//!
//! # Invariants
//! - `id` is stable for the activity lifetime, including moves between days.
//! - `time` is a 24h `HH:MM` string when validated; edits do not enforce it.
//! - Blank `location`/`notes` are stored as `None`.

use crate::model::id::ActivityId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static TIME_OF_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid time-of-day regex"));

/// Returns whether `value` is a 24h `HH:MM` time of day.
pub fn is_valid_time_of_day(value: &str) -> bool {
    TIME_OF_DAY_RE.is_match(value)
}

/// Validation errors for activity records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityValidationError {
    /// Activity id is empty after trim.
    BlankId,
    /// `time` is not a 24h `HH:MM` string.
    InvalidTime { id: ActivityId, value: String },
}

impl Display for ActivityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "activity id must not be blank"),
            Self::InvalidTime { id, value } => {
                write!(f, "activity {id} has invalid time `{value}`; expected HH:MM")
            }
        }
    }
}

impl Error for ActivityValidationError {}

/// Editable activity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityField {
    Time,
    Title,
    Location,
    Notes,
}

impl ActivityField {
    /// Stable lowercase label, matching the `Activity` wire field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Title => "title",
            Self::Location => "location",
            Self::Notes => "notes",
        }
    }
}

impl Display for ActivityField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownActivityField(pub String);

impl Display for UnknownActivityField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown activity field `{}`; expected time|title|location|notes",
            self.0
        )
    }
}

impl Error for UnknownActivityField {}

impl FromStr for ActivityField {
    type Err = UnknownActivityField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "title" => Ok(Self::Title),
            "location" => Ok(Self::Location),
            "notes" => Ok(Self::Notes),
            other => Err(UnknownActivityField(other.to_string())),
        }
    }
}

/// One scheduled event within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    /// Time of day, `HH:MM`.
    pub time: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    pub notes: Option<String>,
}

impl Activity {
    /// Creates an activity with a freshly generated id and no location/notes.
    pub fn new(time: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_id(ActivityId::generate(), time, title)
    }

    /// Creates an activity with a caller-provided id.
    ///
    /// Used by import and sample data where identity already exists.
    pub fn with_id(
        id: impl Into<ActivityId>,
        time: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            title: title.into(),
            location: None,
            notes: None,
        }
    }

    /// Builder-style location setter.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location.into());
        self
    }

    /// Builder-style notes setter.
    pub fn noting(mut self, notes: impl Into<String>) -> Self {
        self.notes = non_blank(notes.into());
        self
    }

    /// Replaces one field in place.
    pub fn set_field(&mut self, field: ActivityField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ActivityField::Time => self.time = value,
            ActivityField::Title => self.title = value,
            ActivityField::Location => self.location = non_blank(value),
            ActivityField::Notes => self.notes = non_blank(value),
        }
    }

    /// Reads one field; absent optional fields return `None`.
    pub fn field(&self, field: ActivityField) -> Option<&str> {
        match field {
            ActivityField::Time => Some(self.time.as_str()),
            ActivityField::Title => Some(self.title.as_str()),
            ActivityField::Location => self.location.as_deref(),
            ActivityField::Notes => self.notes.as_deref(),
        }
    }

    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), ActivityValidationError> {
        if self.id.is_blank() {
            return Err(ActivityValidationError::BlankId);
        }
        if !is_valid_time_of_day(self.time.as_str()) {
            return Err(ActivityValidationError::InvalidTime {
                id: self.id.clone(),
                value: self.time.clone(),
            });
        }
        Ok(())
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn deserialize_non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_blank))
}
