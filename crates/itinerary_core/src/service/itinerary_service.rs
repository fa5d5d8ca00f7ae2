//! Itinerary controller service.
//!
//! # Responsibility
//! - Hold the one itinerary value, the edit target and pending notices.
//! - Expose reorder, move and CRUD use-cases for UI/FFI callers.
//!
//! # Invariants
//! - Each operation commits one new itinerary value or nothing at all.
//! - The edit target always names an activity present in the named day.
//! - Deleting the edited activity or its day resets the edit target.

use crate::config::{ConfigError, ItineraryConfig};
use crate::gesture::{DragResult, ReorderRequest};
use crate::model::activity::{Activity, ActivityField};
use crate::model::id::{ActivityId, DayId};
use crate::model::itinerary::{Itinerary, ItineraryError, ItineraryResult};
use crate::service::notice::Notice;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by itinerary service operations.
pub type ServiceResult<T> = Result<T, ItineraryServiceError>;

/// Errors from itinerary service operations.
///
/// Every error means the operation was declined and state is unchanged.
#[derive(Debug)]
pub enum ItineraryServiceError {
    /// Model-level rejection (blank input, unknown id, bad index).
    Rejected(ItineraryError),
    /// Field edit requested while nothing is being edited.
    NoEditTarget,
    /// Field edit requested for an activity other than the edit target.
    NotEditTarget {
        requested: ActivityId,
        current: ActivityId,
    },
    /// Supplied configuration failed validation.
    Config(ConfigError),
}

impl Display for ItineraryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(err) => write!(f, "{err}"),
            Self::NoEditTarget => write!(f, "no activity is being edited"),
            Self::NotEditTarget { requested, current } => write!(
                f,
                "activity {requested} is not the edit target (editing {current})"
            ),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ItineraryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(err) => Some(err),
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ItineraryError> for ItineraryServiceError {
    fn from(value: ItineraryError) -> Self {
        Self::Rejected(value)
    }
}

impl From<ConfigError> for ItineraryServiceError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Activity currently open for field editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditTarget {
    #[default]
    None,
    Editing {
        day_id: DayId,
        activity_id: ActivityId,
    },
}

impl EditTarget {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn activity_id(&self) -> Option<&ActivityId> {
        match self {
            Self::Editing { activity_id, .. } => Some(activity_id),
            Self::None => None,
        }
    }

    pub fn day_id(&self) -> Option<&DayId> {
        match self {
            Self::Editing { day_id, .. } => Some(day_id),
            Self::None => None,
        }
    }
}

/// Result of applying one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped outside any list; nothing to do.
    Cancelled,
    /// The matching reorder was committed.
    Applied,
}

/// Single owning controller for one trip itinerary.
#[derive(Debug, Clone, Default)]
pub struct ItineraryService {
    itinerary: Itinerary,
    edit_target: EditTarget,
    config: ItineraryConfig,
    notices: Vec<Notice>,
}

impl ItineraryService {
    /// Creates a service over an existing itinerary with default config.
    pub fn new(itinerary: Itinerary) -> Self {
        Self {
            itinerary,
            ..Self::default()
        }
    }

    /// Creates a service with validated configuration.
    pub fn with_config(itinerary: Itinerary, config: ItineraryConfig) -> ServiceResult<Self> {
        config.validate()?;
        Ok(Self {
            itinerary,
            config,
            ..Self::default()
        })
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn edit_target(&self) -> &EditTarget {
        &self.edit_target
    }

    pub fn config(&self) -> &ItineraryConfig {
        &self.config
    }

    /// Returns the activity currently open for editing, if any.
    pub fn editing_activity(&self) -> Option<&Activity> {
        match &self.edit_target {
            EditTarget::Editing {
                day_id,
                activity_id,
            } => self
                .itinerary
                .day(day_id)
                .and_then(|day| day.activity(activity_id)),
            EditTarget::None => None,
        }
    }

    /// Owned copy of the current itinerary for rendering or export.
    pub fn snapshot(&self) -> Itinerary {
        self.itinerary.clone()
    }

    /// Moves the day at `from` to position `to`.
    pub fn reorder_days(&mut self, from: usize, to: usize) -> ServiceResult<()> {
        let next = self.itinerary.reorder_days(from, to);
        self.commit("reorder_days", next)
    }

    /// Reorders activities inside one day.
    pub fn reorder_activities(
        &mut self,
        day_id: &DayId,
        from: usize,
        to: usize,
    ) -> ServiceResult<()> {
        let next = self.itinerary.reorder_activities(day_id, from, to);
        self.commit("reorder_activities", next)
    }

    /// Moves one activity between days. The edit target follows the moved
    /// activity.
    pub fn move_activity(
        &mut self,
        source_day_id: &DayId,
        destination_day_id: &DayId,
        from: usize,
        to: usize,
    ) -> ServiceResult<()> {
        let moved_id = self
            .itinerary
            .day(source_day_id)
            .and_then(|day| day.activities.get(from))
            .map(|activity| activity.id.clone());

        let next = self
            .itinerary
            .move_activity(source_day_id, destination_day_id, from, to);
        self.commit("move_activity", next)?;

        if let EditTarget::Editing {
            day_id,
            activity_id,
        } = &mut self.edit_target
        {
            if moved_id.as_ref() == Some(&*activity_id) {
                *day_id = destination_day_id.clone();
            }
        }
        Ok(())
    }

    /// Applies one completed drag gesture.
    pub fn apply_drop(&mut self, gesture: &DragResult) -> ServiceResult<DropOutcome> {
        let Some(request) = gesture.resolve() else {
            debug!("event=drop_cancelled module=itinerary status=ok");
            return Ok(DropOutcome::Cancelled);
        };

        match request {
            ReorderRequest::Days { from, to } => self.reorder_days(from, to)?,
            ReorderRequest::WithinDay { day_id, from, to } => {
                self.reorder_activities(&day_id, from, to)?
            }
            ReorderRequest::BetweenDays {
                source_day_id,
                destination_day_id,
                from,
                to,
            } => self.move_activity(&source_day_id, &destination_day_id, from, to)?,
        }
        Ok(DropOutcome::Applied)
    }

    /// Appends a new empty day and queues a "Day added" notice.
    pub fn add_day(&mut self, title: &str, date: &str) -> ServiceResult<DayId> {
        let (next, day_id) = match self.itinerary.add_day(title, date) {
            Ok(value) => value,
            Err(err) => return Err(self.reject("add_day", err)),
        };
        self.replace("add_day", next);
        self.notices.push(Notice::day_added(title.trim()));
        Ok(day_id)
    }

    /// Removes one day and its activities; clears the edit target if it
    /// pointed into this day.
    pub fn delete_day(&mut self, day_id: &DayId) -> ServiceResult<()> {
        let next = self.itinerary.remove_day(day_id);
        self.commit("delete_day", next)?;

        if self.edit_target.day_id() == Some(day_id) {
            self.clear_selection();
        }
        self.notices.push(Notice::day_removed());
        Ok(())
    }

    /// Appends a default activity to a day and makes it the edit target.
    pub fn add_activity(&mut self, day_id: &DayId) -> ServiceResult<ActivityId> {
        let activity = Activity::with_id(
            self.itinerary.fresh_activity_id(),
            self.config.default_activity_time.as_str(),
            self.config.default_activity_title.as_str(),
        );
        let activity_id = activity.id.clone();

        let next = self.itinerary.add_activity(day_id, activity);
        self.commit("add_activity", next)?;

        self.edit_target = EditTarget::Editing {
            day_id: day_id.clone(),
            activity_id: activity_id.clone(),
        };
        Ok(activity_id)
    }

    /// Removes one activity; clears the edit target if it pointed at it.
    pub fn delete_activity(
        &mut self,
        day_id: &DayId,
        activity_id: &ActivityId,
    ) -> ServiceResult<()> {
        let next = self.itinerary.remove_activity(day_id, activity_id);
        self.commit("delete_activity", next)?;

        if self.edit_target.activity_id() == Some(activity_id) {
            self.clear_selection();
        }
        Ok(())
    }

    /// Opens one activity for editing.
    pub fn select_activity(
        &mut self,
        day_id: &DayId,
        activity_id: &ActivityId,
    ) -> ServiceResult<()> {
        let found = match self.itinerary.day(day_id) {
            None => Err(ItineraryError::DayNotFound(day_id.clone())),
            Some(day) if !day.contains_activity(activity_id) => {
                Err(ItineraryError::ActivityNotFound {
                    day_id: day_id.clone(),
                    activity_id: activity_id.clone(),
                })
            }
            Some(_) => Ok(()),
        };
        if let Err(err) = found {
            return Err(self.reject("select_activity", err));
        }

        self.edit_target = EditTarget::Editing {
            day_id: day_id.clone(),
            activity_id: activity_id.clone(),
        };
        Ok(())
    }

    /// Closes the edit form without changing any activity.
    pub fn clear_selection(&mut self) {
        self.edit_target = EditTarget::None;
    }

    /// Replaces one field of the activity currently being edited.
    pub fn update_activity_field(
        &mut self,
        activity_id: &ActivityId,
        field: ActivityField,
        value: impl Into<String>,
    ) -> ServiceResult<()> {
        let EditTarget::Editing {
            day_id,
            activity_id: current,
        } = &self.edit_target
        else {
            debug!(
                "event=update_activity_field module=itinerary status=rejected reason=no_edit_target"
            );
            return Err(ItineraryServiceError::NoEditTarget);
        };
        if current != activity_id {
            debug!(
                "event=update_activity_field module=itinerary status=rejected reason=not_edit_target"
            );
            return Err(ItineraryServiceError::NotEditTarget {
                requested: activity_id.clone(),
                current: current.clone(),
            });
        }

        let next = self
            .itinerary
            .update_activity_field(day_id, activity_id, field, value);
        self.commit("update_activity_field", next)
    }

    /// Acknowledges a save request. Nothing is persisted.
    pub fn save(&mut self) -> Notice {
        info!(
            "event=itinerary_save module=itinerary status=ok persisted=false days={} activities={}",
            self.itinerary.len(),
            self.itinerary.activity_count()
        );
        let notice = Notice::itinerary_saved();
        self.notices.push(notice.clone());
        notice
    }

    /// Drains queued notices in emission order.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn commit(
        &mut self,
        event: &'static str,
        next: ItineraryResult<Itinerary>,
    ) -> ServiceResult<()> {
        match next {
            Ok(next) => {
                self.replace(event, next);
                Ok(())
            }
            Err(err) => Err(self.reject(event, err)),
        }
    }

    fn replace(&mut self, event: &'static str, next: Itinerary) {
        self.itinerary = next;
        debug!(
            "event={} module=itinerary status=ok days={} activities={}",
            event,
            self.itinerary.len(),
            self.itinerary.activity_count()
        );
    }

    fn reject(&self, event: &'static str, err: ItineraryError) -> ItineraryServiceError {
        info!(
            "event={} module=itinerary status=rejected reason={}",
            event,
            err.code()
        );
        err.into()
    }
}
