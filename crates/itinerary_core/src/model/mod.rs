//! Itinerary domain model.
//!
//! # Responsibility
//! - Define the day/activity records and the itinerary aggregate.
//! - Keep every reorder and CRUD transformation free of UI concerns.
//!
//! # Invariants
//! - Day ids are unique; activity ids are unique across the whole itinerary.
//! - Each activity belongs to exactly one day at a time.
//! - Sequence positions are zero-based and contiguous.

pub mod activity;
pub mod day;
pub mod id;
pub mod itinerary;
