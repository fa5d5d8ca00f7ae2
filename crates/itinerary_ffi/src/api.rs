//! FFI use-case API for the Flutter itinerary screen.
//!
//! # Responsibility
//! - Expose the itinerary session (read model + operations) to Dart via FRB.
//! - Translate core rejections into `changed=false` envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Exactly one itinerary session exists per process.
//! - A rejected operation never changes the session state.

use itinerary_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    sample_itinerary, Activity, ActivityField, ActivityId, Day, DayId, DragKind, DragResult,
    DropLocation, DropOutcome, ItineraryConfig, ItineraryService, Notice,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};

static SESSION: OnceLock<Mutex<ItineraryService>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for itinerary operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryActionResponse {
    /// Whether the session state changed.
    pub changed: bool,
    /// Created day/activity id, when the action creates one.
    pub id: Option<String>,
    /// Human-readable message for diagnostics.
    pub message: String,
}

impl ItineraryActionResponse {
    fn applied(message: impl Into<String>) -> Self {
        Self {
            changed: true,
            id: None,
            message: message.into(),
        }
    }

    fn created(message: impl Into<String>, id: String) -> Self {
        Self {
            changed: true,
            id: Some(id),
            message: message.into(),
        }
    }

    fn declined(message: impl Into<String>) -> Self {
        Self {
            changed: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Activity row for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityView {
    pub id: String,
    pub time: String,
    pub title: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    /// Whether this row is the current edit target.
    pub is_editing: bool,
}

/// Day card for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub id: String,
    pub title: String,
    pub date: String,
    pub activities: Vec<ActivityView>,
}

/// Confirmation notice for a transient toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    /// `day_added|day_removed|itinerary_saved`.
    pub kind: String,
    pub title: String,
    pub description: String,
}

/// Resets the session to the sample itinerary.
///
/// `config_json` optionally overrides activity defaults; an invalid config
/// leaves the current session untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_reset(config_json: Option<String>) -> ItineraryActionResponse {
    let config = match config_json.as_deref().map(str::trim) {
        None | Some("") => ItineraryConfig::default(),
        Some(raw) => match ItineraryConfig::from_json_str(raw) {
            Ok(config) => config,
            Err(err) => {
                return ItineraryActionResponse::declined(format!("itinerary_reset failed: {err}"))
            }
        },
    };
    match ItineraryService::with_config(sample_itinerary(), config) {
        Ok(service) => {
            *lock_session() = service;
            ItineraryActionResponse::applied("Itinerary reset.")
        }
        Err(err) => ItineraryActionResponse::declined(format!("itinerary_reset failed: {err}")),
    }
}

/// Returns the whole itinerary as JSON (`{"days":[...]}`).
#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_snapshot_json() -> String {
    let snapshot = lock_session().snapshot();
    match serde_json::to_string(&snapshot) {
        Ok(json) => json,
        Err(err) => {
            warn!("event=snapshot_export module=ffi status=error error={err}");
            String::from(r#"{"days":[]}"#)
        }
    }
}

/// Returns the ordered day cards with the edit target flagged.
#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_days() -> Vec<DayView> {
    let session = lock_session();
    let editing = session.edit_target().activity_id().cloned();
    session
        .itinerary()
        .days()
        .iter()
        .map(|day| to_day_view(day, editing.as_ref()))
        .collect()
}

#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_add_day(title: String, date: String) -> ItineraryActionResponse {
    match lock_session().add_day(title.as_str(), date.as_str()) {
        Ok(day_id) => ItineraryActionResponse::created("Day added.", day_id.to_string()),
        Err(err) => ItineraryActionResponse::declined(format!("itinerary_add_day declined: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_delete_day(day_id: String) -> ItineraryActionResponse {
    respond(
        "itinerary_delete_day",
        "Day removed.",
        lock_session().delete_day(&DayId::from(day_id)),
    )
}

/// Adds a default activity to a day and opens it for editing.
#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_add_activity(day_id: String) -> ItineraryActionResponse {
    match lock_session().add_activity(&DayId::from(day_id)) {
        Ok(activity_id) => {
            ItineraryActionResponse::created("Activity added.", activity_id.to_string())
        }
        Err(err) => {
            ItineraryActionResponse::declined(format!("itinerary_add_activity declined: {err}"))
        }
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_delete_activity(day_id: String, activity_id: String) -> ItineraryActionResponse {
    respond(
        "itinerary_delete_activity",
        "Activity removed.",
        lock_session().delete_activity(&DayId::from(day_id), &ActivityId::from(activity_id)),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_select_activity(day_id: String, activity_id: String) -> ItineraryActionResponse {
    respond(
        "itinerary_select_activity",
        "Activity selected.",
        lock_session().select_activity(&DayId::from(day_id), &ActivityId::from(activity_id)),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_clear_selection() -> ItineraryActionResponse {
    lock_session().clear_selection();
    ItineraryActionResponse::applied("Selection cleared.")
}

/// Replaces one field (`time|title|location|notes`) of the edit target.
#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_update_activity_field(
    activity_id: String,
    field: String,
    value: String,
) -> ItineraryActionResponse {
    let field = match field.parse::<ActivityField>() {
        Ok(field) => field,
        Err(err) => {
            return ItineraryActionResponse::declined(format!(
                "itinerary_update_activity_field declined: {err}"
            ))
        }
    };
    respond(
        "itinerary_update_activity_field",
        "Activity updated.",
        lock_session().update_activity_field(&ActivityId::from(activity_id), field, value),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_reorder_days(from: u32, to: u32) -> ItineraryActionResponse {
    respond(
        "itinerary_reorder_days",
        "Days reordered.",
        lock_session().reorder_days(from as usize, to as usize),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_reorder_activities(day_id: String, from: u32, to: u32) -> ItineraryActionResponse {
    respond(
        "itinerary_reorder_activities",
        "Activities reordered.",
        lock_session().reorder_activities(&DayId::from(day_id), from as usize, to as usize),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_move_activity(
    source_day_id: String,
    destination_day_id: String,
    from: u32,
    to: u32,
) -> ItineraryActionResponse {
    respond(
        "itinerary_move_activity",
        "Activity moved.",
        lock_session().move_activity(
            &DayId::from(source_day_id),
            &DayId::from(destination_day_id),
            from as usize,
            to as usize,
        ),
    )
}

/// Applies a completed drag gesture from the drag-and-drop widget.
///
/// Input semantics:
/// - `kind`: `day` or `activity`.
/// - `destination_container_id`/`destination_index`: `None` when dropped
///   outside any list.
#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_drag_end(
    kind: String,
    source_container_id: String,
    source_index: u32,
    destination_container_id: Option<String>,
    destination_index: Option<u32>,
) -> ItineraryActionResponse {
    let kind = match kind.trim().to_ascii_lowercase().as_str() {
        "day" => DragKind::Day,
        "activity" => DragKind::Activity,
        other => {
            return ItineraryActionResponse::declined(format!(
                "itinerary_drag_end declined: unknown drag kind `{other}`"
            ))
        }
    };
    let destination = match (destination_container_id, destination_index) {
        (Some(container_id), Some(index)) => Some(DropLocation::new(container_id, index as usize)),
        _ => None,
    };
    let gesture = DragResult {
        kind,
        source: DropLocation::new(source_container_id, source_index as usize),
        destination,
    };

    match lock_session().apply_drop(&gesture) {
        Ok(DropOutcome::Applied) => ItineraryActionResponse::applied("Drop applied."),
        Ok(DropOutcome::Cancelled) => ItineraryActionResponse::declined("Dropped outside list."),
        Err(err) => ItineraryActionResponse::declined(format!("itinerary_drag_end declined: {err}")),
    }
}

/// Acknowledges a save request. Nothing is persisted.
#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_save() -> NoticeView {
    to_notice_view(lock_session().save())
}

/// Drains queued confirmation notices.
#[flutter_rust_bridge::frb(sync)]
pub fn itinerary_take_notices() -> Vec<NoticeView> {
    lock_session()
        .take_notices()
        .into_iter()
        .map(to_notice_view)
        .collect()
}

fn lock_session() -> MutexGuard<'static, ItineraryService> {
    let session = SESSION.get_or_init(|| Mutex::new(ItineraryService::new(sample_itinerary())));
    session.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn respond<E: std::fmt::Display>(
    operation: &str,
    success: &str,
    result: Result<(), E>,
) -> ItineraryActionResponse {
    match result {
        Ok(()) => ItineraryActionResponse::applied(success),
        Err(err) => ItineraryActionResponse::declined(format!("{operation} declined: {err}")),
    }
}

fn to_day_view(day: &Day, editing: Option<&ActivityId>) -> DayView {
    DayView {
        id: day.id.to_string(),
        title: day.title.clone(),
        date: day.date.clone(),
        activities: day
            .activities
            .iter()
            .map(|activity| to_activity_view(activity, editing))
            .collect(),
    }
}

fn to_activity_view(activity: &Activity, editing: Option<&ActivityId>) -> ActivityView {
    ActivityView {
        id: activity.id.to_string(),
        time: activity.time.clone(),
        title: activity.title.clone(),
        location: activity.location.clone(),
        notes: activity.notes.clone(),
        is_editing: editing == Some(&activity.id),
    }
}

fn to_notice_view(notice: Notice) -> NoticeView {
    NoticeView {
        kind: notice.kind.as_str().to_string(),
        title: notice.title,
        description: notice.description,
    }
}
