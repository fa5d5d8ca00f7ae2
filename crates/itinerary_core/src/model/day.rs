//! Day domain model.

use crate::model::activity::Activity;
use crate::model::id::{ActivityId, DayId};
use serde::{Deserialize, Serialize};

/// One calendar day of a trip, owning its ordered activity schedule.
///
/// `activities` order is the schedule order shown to the user; it is not
/// derived from `Activity::time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub id: DayId,
    /// Display title, e.g. `Day 1 - Arrival`.
    pub title: String,
    /// Display date. Free-form; not parsed.
    pub date: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Day {
    /// Creates an empty day with a freshly generated id.
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self::with_id(DayId::generate(), title, date)
    }

    /// Creates an empty day with a caller-provided id.
    pub fn with_id(id: impl Into<DayId>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            activities: Vec::new(),
        }
    }

    /// Builder-style schedule setter.
    pub fn with_activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = activities;
        self
    }

    /// Zero-based schedule position of one activity.
    pub fn position_of(&self, activity_id: &ActivityId) -> Option<usize> {
        self.activities
            .iter()
            .position(|activity| &activity.id == activity_id)
    }

    pub fn activity(&self, activity_id: &ActivityId) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|activity| &activity.id == activity_id)
    }

    pub fn contains_activity(&self, activity_id: &ActivityId) -> bool {
        self.position_of(activity_id).is_some()
    }
}
