//! Transient confirmation notices for the presentation layer.

/// Notice category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    DayAdded,
    DayRemoved,
    ItinerarySaved,
}

impl NoticeKind {
    /// Stable snake_case label for presentation callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DayAdded => "day_added",
            Self::DayRemoved => "day_removed",
            Self::ItinerarySaved => "itinerary_saved",
        }
    }
}

/// One user-facing confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub(crate) fn day_added(day_title: &str) -> Self {
        Self {
            kind: NoticeKind::DayAdded,
            title: "Day added".to_string(),
            description: format!("{day_title} has been added to your itinerary."),
        }
    }

    pub(crate) fn day_removed() -> Self {
        Self {
            kind: NoticeKind::DayRemoved,
            title: "Day removed".to_string(),
            description: "The day has been removed from your itinerary.".to_string(),
        }
    }

    pub(crate) fn itinerary_saved() -> Self {
        Self {
            kind: NoticeKind::ItinerarySaved,
            title: "Itinerary saved".to_string(),
            description: "Your itinerary has been saved successfully.".to_string(),
        }
    }
}
