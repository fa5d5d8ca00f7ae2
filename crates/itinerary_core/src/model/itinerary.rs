//! Itinerary aggregate and its reorder/CRUD transformations.
//!
//! # Responsibility
//! - Own the ordered day -> activity structure for one trip.
//! - Apply reorder, move and CRUD as whole-value transformations.
//!
//! # Invariants
//! - Day ids are unique; activity ids are unique across all days.
//! - Transformations take `&self` and return a new `Itinerary`. A rejected
//!   operation returns an error and leaves no partial state behind.
//! - A target index equal to the sequence length after removal appends.
//!   Larger indices are rejected, never clamped.

use crate::model::activity::{Activity, ActivityField, ActivityValidationError};
use crate::model::day::Day;
use crate::model::id::{ActivityId, DayId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by itinerary transformations.
pub type ItineraryResult<T> = Result<T, ItineraryError>;

/// Structural validation errors for imported itineraries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItineraryValidationError {
    /// Day id is empty after trim.
    BlankDayId,
    /// Two days share one id.
    DuplicateDayId(DayId),
    /// Two activities (in any days) share one id.
    DuplicateActivityId(ActivityId),
    /// One activity failed record-level validation.
    Activity(ActivityValidationError),
}

impl Display for ItineraryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankDayId => write!(f, "day id must not be blank"),
            Self::DuplicateDayId(id) => write!(f, "duplicate day id: {id}"),
            Self::DuplicateActivityId(id) => write!(f, "duplicate activity id: {id}"),
            Self::Activity(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ItineraryValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Activity(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ActivityValidationError> for ItineraryValidationError {
    fn from(value: ActivityValidationError) -> Self {
        Self::Activity(value)
    }
}

/// Sequence an index refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexScope {
    /// The itinerary's day sequence.
    Days,
    /// The activity sequence of one day.
    Activities(DayId),
}

impl Display for IndexScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days => write!(f, "day"),
            Self::Activities(day_id) => write!(f, "activity (day {day_id})"),
        }
    }
}

/// Rejection reasons for itinerary transformations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItineraryError {
    /// Required text input is blank after trim.
    BlankField(&'static str),
    /// No day with this id.
    DayNotFound(DayId),
    /// The day exists but does not hold this activity.
    ActivityNotFound {
        day_id: DayId,
        activity_id: ActivityId,
    },
    /// Reorder/move index outside the target sequence.
    IndexOutOfRange {
        scope: IndexScope,
        index: usize,
        len: usize,
    },
    /// Inserted record would break structural invariants.
    Validation(ItineraryValidationError),
}

impl Display for ItineraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::DayNotFound(id) => write!(f, "day not found: {id}"),
            Self::ActivityNotFound {
                day_id,
                activity_id,
            } => write!(f, "activity {activity_id} not found in day {day_id}"),
            Self::IndexOutOfRange { scope, index, len } => {
                write!(f, "{scope} index {index} out of range (len {len})")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl ItineraryError {
    /// Stable metadata-only reason code for logs and diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BlankField(_) => "blank_field",
            Self::DayNotFound(_) => "day_not_found",
            Self::ActivityNotFound { .. } => "activity_not_found",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::Validation(_) => "validation",
        }
    }
}

impl Error for ItineraryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ItineraryValidationError> for ItineraryError {
    fn from(value: ItineraryValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered collection of days for one trip.
///
/// Day order is the order arranged by the user, not sorted by `Day::date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItinerary")]
pub struct Itinerary {
    days: Vec<Day>,
}

#[derive(Deserialize)]
struct RawItinerary {
    #[serde(default)]
    days: Vec<Day>,
}

impl TryFrom<RawItinerary> for Itinerary {
    type Error = ItineraryValidationError;

    fn try_from(value: RawItinerary) -> Result<Self, Self::Error> {
        Self::from_days(value.days)
    }
}

impl Itinerary {
    /// Creates an empty itinerary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an itinerary from existing days, enforcing id uniqueness and
    /// activity record validity.
    pub fn from_days(days: Vec<Day>) -> Result<Self, ItineraryValidationError> {
        let itinerary = Self { days };
        itinerary.validate()?;
        Ok(itinerary)
    }

    /// Wraps days known to be valid, such as the built-in sample.
    pub(crate) fn from_trusted_days(days: Vec<Day>) -> Self {
        Self { days }
    }

    /// Checks structural invariants over the whole itinerary.
    pub fn validate(&self) -> Result<(), ItineraryValidationError> {
        let mut day_ids = HashSet::new();
        let mut activity_ids = HashSet::new();
        for day in &self.days {
            if day.id.is_blank() {
                return Err(ItineraryValidationError::BlankDayId);
            }
            if !day_ids.insert(&day.id) {
                return Err(ItineraryValidationError::DuplicateDayId(day.id.clone()));
            }
            for activity in &day.activities {
                activity.validate()?;
                if !activity_ids.insert(&activity.id) {
                    return Err(ItineraryValidationError::DuplicateActivityId(
                        activity.id.clone(),
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn into_days(self) -> Vec<Day> {
        self.days
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, day_id: &DayId) -> Option<&Day> {
        self.days.iter().find(|day| &day.id == day_id)
    }

    pub fn day_index(&self, day_id: &DayId) -> Option<usize> {
        self.days.iter().position(|day| &day.id == day_id)
    }

    /// Total number of activities across all days.
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|day| day.activities.len()).sum()
    }

    /// All activity ids, day by day in schedule order.
    pub fn activity_ids(&self) -> Vec<&ActivityId> {
        self.days
            .iter()
            .flat_map(|day| day.activities.iter().map(|activity| &activity.id))
            .collect()
    }

    /// Finds the owning day and schedule position of one activity.
    pub fn locate_activity(&self, activity_id: &ActivityId) -> Option<(&Day, usize)> {
        self.days.iter().find_map(|day| {
            day.position_of(activity_id)
                .map(|position| (day, position))
        })
    }

    /// Generates a day id not used by this itinerary.
    pub fn fresh_day_id(&self) -> DayId {
        loop {
            let candidate = DayId::generate();
            if self.day(&candidate).is_none() {
                return candidate;
            }
        }
    }

    /// Generates an activity id not used by this itinerary.
    pub fn fresh_activity_id(&self) -> ActivityId {
        loop {
            let candidate = ActivityId::generate();
            if self.locate_activity(&candidate).is_none() {
                return candidate;
            }
        }
    }

    /// Moves the day at `from` to position `to`.
    pub fn reorder_days(&self, from: usize, to: usize) -> ItineraryResult<Self> {
        let mut days = self.days.clone();
        reorder_in_place(&mut days, from, to, IndexScope::Days)?;
        Ok(Self { days })
    }

    /// Moves one activity inside a single day's schedule.
    pub fn reorder_activities(
        &self,
        day_id: &DayId,
        from: usize,
        to: usize,
    ) -> ItineraryResult<Self> {
        let day_index = self.require_day_index(day_id)?;
        let mut days = self.days.clone();
        reorder_in_place(
            &mut days[day_index].activities,
            from,
            to,
            IndexScope::Activities(day_id.clone()),
        )?;
        Ok(Self { days })
    }

    /// Moves the activity at `from` in the source day to `to` in the
    /// destination day. Same-day moves are plain reorders.
    ///
    /// # Invariants
    /// - Total activity count is unchanged.
    /// - The moved activity keeps its id and content.
    pub fn move_activity(
        &self,
        source_day_id: &DayId,
        destination_day_id: &DayId,
        from: usize,
        to: usize,
    ) -> ItineraryResult<Self> {
        if source_day_id == destination_day_id {
            return self.reorder_activities(source_day_id, from, to);
        }

        let source_index = self.require_day_index(source_day_id)?;
        let destination_index = self.require_day_index(destination_day_id)?;

        let source_len = self.days[source_index].activities.len();
        if from >= source_len {
            return Err(ItineraryError::IndexOutOfRange {
                scope: IndexScope::Activities(source_day_id.clone()),
                index: from,
                len: source_len,
            });
        }
        let destination_len = self.days[destination_index].activities.len();
        if to > destination_len {
            return Err(ItineraryError::IndexOutOfRange {
                scope: IndexScope::Activities(destination_day_id.clone()),
                index: to,
                len: destination_len,
            });
        }

        let mut days = self.days.clone();
        let moved = days[source_index].activities.remove(from);
        days[destination_index].activities.insert(to, moved);
        Ok(Self { days })
    }

    /// Appends a new empty day. Inputs are trimmed and must not be blank.
    pub fn add_day(&self, title: &str, date: &str) -> ItineraryResult<(Self, DayId)> {
        let title = require_text(title, "title")?;
        let date = require_text(date, "date")?;

        let day_id = self.fresh_day_id();
        let mut days = self.days.clone();
        days.push(Day::with_id(day_id.clone(), title, date));
        Ok((Self { days }, day_id))
    }

    /// Removes one day together with all its activities.
    pub fn remove_day(&self, day_id: &DayId) -> ItineraryResult<Self> {
        let day_index = self.require_day_index(day_id)?;
        let mut days = self.days.clone();
        days.remove(day_index);
        Ok(Self { days })
    }

    /// Appends one activity to a day's schedule.
    pub fn add_activity(&self, day_id: &DayId, activity: Activity) -> ItineraryResult<Self> {
        let day_index = self.require_day_index(day_id)?;
        if activity.id.is_blank() {
            return Err(ItineraryValidationError::Activity(ActivityValidationError::BlankId).into());
        }
        if self.locate_activity(&activity.id).is_some() {
            return Err(ItineraryValidationError::DuplicateActivityId(activity.id).into());
        }

        let mut days = self.days.clone();
        days[day_index].activities.push(activity);
        Ok(Self { days })
    }

    /// Removes one activity from the named day.
    pub fn remove_activity(
        &self,
        day_id: &DayId,
        activity_id: &ActivityId,
    ) -> ItineraryResult<Self> {
        let (day_index, position) = self.require_activity(day_id, activity_id)?;
        let mut days = self.days.clone();
        days[day_index].activities.remove(position);
        Ok(Self { days })
    }

    /// Replaces one field of one activity.
    pub fn update_activity_field(
        &self,
        day_id: &DayId,
        activity_id: &ActivityId,
        field: ActivityField,
        value: impl Into<String>,
    ) -> ItineraryResult<Self> {
        let (day_index, position) = self.require_activity(day_id, activity_id)?;
        let mut days = self.days.clone();
        days[day_index].activities[position].set_field(field, value);
        Ok(Self { days })
    }

    fn require_day_index(&self, day_id: &DayId) -> ItineraryResult<usize> {
        self.day_index(day_id)
            .ok_or_else(|| ItineraryError::DayNotFound(day_id.clone()))
    }

    fn require_activity(
        &self,
        day_id: &DayId,
        activity_id: &ActivityId,
    ) -> ItineraryResult<(usize, usize)> {
        let day_index = self.require_day_index(day_id)?;
        let position = self.days[day_index].position_of(activity_id).ok_or_else(|| {
            ItineraryError::ActivityNotFound {
                day_id: day_id.clone(),
                activity_id: activity_id.clone(),
            }
        })?;
        Ok((day_index, position))
    }
}

fn require_text<'a>(value: &'a str, field: &'static str) -> ItineraryResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ItineraryError::BlankField(field));
    }
    Ok(trimmed)
}

/// Remove-then-insert inside one sequence.
fn reorder_in_place<T>(
    items: &mut Vec<T>,
    from: usize,
    to: usize,
    scope: IndexScope,
) -> ItineraryResult<()> {
    let len = items.len();
    if let Some(index) = [from, to].into_iter().find(|index| *index >= len) {
        return Err(ItineraryError::IndexOutOfRange { scope, index, len });
    }
    if from == to {
        return Ok(());
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}
