//! Flutter-facing bridge crate for the itinerary core.

pub mod api;
