//! Itinerary use-case services.
//!
//! # Responsibility
//! - Own the single mutable itinerary value and the edit target.
//! - Commit model transformations as whole-value replacements.
//! - Queue confirmation notices for the presentation layer.

pub mod itinerary_service;
pub mod notice;
