//! Core itinerary logic for the trip planner.
//! This crate is the single source of truth for itinerary invariants.

pub mod config;
pub mod gesture;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;

pub use config::{ConfigError, ItineraryConfig, DEFAULT_ACTIVITY_TIME, DEFAULT_ACTIVITY_TITLE};
pub use gesture::{DragKind, DragResult, DropLocation, ReorderRequest};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{
    is_valid_time_of_day, Activity, ActivityField, ActivityValidationError, UnknownActivityField,
};
pub use model::day::Day;
pub use model::id::{ActivityId, DayId};
pub use model::itinerary::{
    IndexScope, Itinerary, ItineraryError, ItineraryResult, ItineraryValidationError,
};
pub use seed::sample_itinerary;
pub use service::itinerary_service::{
    DropOutcome, EditTarget, ItineraryService, ItineraryServiceError, ServiceResult,
};
pub use service::notice::{Notice, NoticeKind};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
