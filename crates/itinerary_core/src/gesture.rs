//! Drag-and-drop input adapter.
//!
//! # Responsibility
//! - Translate one completed drag gesture into at most one reorder request.
//! - Keep the itinerary core independent from any drag library.
//!
//! # Invariants
//! - A gesture without destination resolves to `None` (dropped outside).
//! - Activity gestures within one container never become cross-day moves.

use crate::model::id::DayId;

/// What was dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// A whole day card in the day list.
    Day,
    /// One activity row inside a day.
    Activity,
}

/// One end of a drag gesture.
///
/// `container_id` is the droppable list id: a day id for activity lists,
/// ignored for day gestures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropLocation {
    pub container_id: String,
    pub index: usize,
}

impl DropLocation {
    pub fn new(container_id: impl Into<String>, index: usize) -> Self {
        Self {
            container_id: container_id.into(),
            index,
        }
    }
}

/// Completed drag gesture as reported by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResult {
    pub kind: DragKind,
    pub source: DropLocation,
    /// `None` when the item was dropped outside any list.
    pub destination: Option<DropLocation>,
}

/// Reorder operation selected by a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderRequest {
    Days {
        from: usize,
        to: usize,
    },
    WithinDay {
        day_id: DayId,
        from: usize,
        to: usize,
    },
    BetweenDays {
        source_day_id: DayId,
        destination_day_id: DayId,
        from: usize,
        to: usize,
    },
}

impl DragResult {
    /// Resolves the gesture into the matching reorder request.
    pub fn resolve(&self) -> Option<ReorderRequest> {
        let destination = self.destination.as_ref()?;
        let from = self.source.index;
        let to = destination.index;

        let request = match self.kind {
            DragKind::Day => ReorderRequest::Days { from, to },
            DragKind::Activity if self.source.container_id == destination.container_id => {
                ReorderRequest::WithinDay {
                    day_id: DayId::from(self.source.container_id.as_str()),
                    from,
                    to,
                }
            }
            DragKind::Activity => ReorderRequest::BetweenDays {
                source_day_id: DayId::from(self.source.container_id.as_str()),
                destination_day_id: DayId::from(destination.container_id.as_str()),
                from,
                to,
            },
        };
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::{DragKind, DragResult, DropLocation, ReorderRequest};
    use crate::model::id::DayId;

    #[test]
    fn dropped_outside_resolves_to_none() {
        let gesture = DragResult {
            kind: DragKind::Activity,
            source: DropLocation::new("day-1", 0),
            destination: None,
        };
        assert_eq!(gesture.resolve(), None);
    }

    #[test]
    fn day_gesture_ignores_container_ids() {
        let gesture = DragResult {
            kind: DragKind::Day,
            source: DropLocation::new("days", 2),
            destination: Some(DropLocation::new("days", 0)),
        };
        assert_eq!(
            gesture.resolve(),
            Some(ReorderRequest::Days { from: 2, to: 0 })
        );
    }

    #[test]
    fn activity_gesture_splits_on_container() {
        let within = DragResult {
            kind: DragKind::Activity,
            source: DropLocation::new("day-1", 0),
            destination: Some(DropLocation::new("day-1", 3)),
        };
        assert_eq!(
            within.resolve(),
            Some(ReorderRequest::WithinDay {
                day_id: DayId::from("day-1"),
                from: 0,
                to: 3,
            })
        );

        let across = DragResult {
            kind: DragKind::Activity,
            source: DropLocation::new("day-1", 1),
            destination: Some(DropLocation::new("day-2", 0)),
        };
        assert_eq!(
            across.resolve(),
            Some(ReorderRequest::BetweenDays {
                source_day_id: DayId::from("day-1"),
                destination_day_id: DayId::from("day-2"),
                from: 1,
                to: 0,
            })
        );
    }
}
