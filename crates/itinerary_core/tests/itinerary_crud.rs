use itinerary_core::{
    sample_itinerary, ActivityField, ActivityId, DayId, DragKind, DragResult, DropLocation,
    DropOutcome, EditTarget, Itinerary, ItineraryConfig, ItineraryError, ItineraryService,
    ItineraryServiceError, NoticeKind, DEFAULT_ACTIVITY_TIME, DEFAULT_ACTIVITY_TITLE,
};
use std::collections::HashSet;

fn sample_service() -> ItineraryService {
    ItineraryService::new(sample_itinerary())
}

#[test]
fn add_day_appends_empty_day_with_trimmed_fields() {
    let mut service = sample_service();

    let day_id = service.add_day("  Day 3 - Versailles ", "June 17, 2025").unwrap();

    let itinerary = service.itinerary();
    assert_eq!(itinerary.len(), 3);
    let day = itinerary.days().last().unwrap();
    assert_eq!(day.id, day_id);
    assert_eq!(day.title, "Day 3 - Versailles");
    assert_eq!(day.date, "June 17, 2025");
    assert!(day.activities.is_empty());
    assert!(day_id.as_str().starts_with("day-"));
}

#[test]
fn add_day_rejects_blank_title_or_date() {
    let mut service = sample_service();
    let before = service.snapshot();

    let err = service.add_day("", "2025-06-01").unwrap_err();
    assert!(matches!(
        err,
        ItineraryServiceError::Rejected(ItineraryError::BlankField("title"))
    ));
    let err = service.add_day("Day 3", "   ").unwrap_err();
    assert!(matches!(
        err,
        ItineraryServiceError::Rejected(ItineraryError::BlankField("date"))
    ));

    assert_eq!(service.itinerary(), &before);
    assert!(service.take_notices().is_empty());
}

#[test]
fn generated_ids_stay_unique() {
    let mut service = ItineraryService::new(Itinerary::new());

    for index in 0..20 {
        let day_id = service
            .add_day(&format!("Day {index}"), "2025-06-01")
            .unwrap();
        for _ in 0..5 {
            service.add_activity(&day_id).unwrap();
        }
    }

    let itinerary = service.itinerary();
    let day_ids: HashSet<_> = itinerary.days().iter().map(|day| &day.id).collect();
    assert_eq!(day_ids.len(), 20);
    let activity_ids: HashSet<_> = itinerary.activity_ids().into_iter().collect();
    assert_eq!(activity_ids.len(), 100);
    itinerary.validate().unwrap();
}

#[test]
fn add_activity_uses_defaults_and_becomes_edit_target() {
    let mut service = sample_service();
    let day_id = DayId::from("day-2");

    let activity_id = service.add_activity(&day_id).unwrap();

    let day = service.itinerary().day(&day_id).unwrap();
    let added = day.activities.last().unwrap();
    assert_eq!(added.id, activity_id);
    assert_eq!(added.time, DEFAULT_ACTIVITY_TIME);
    assert_eq!(added.title, DEFAULT_ACTIVITY_TITLE);
    assert_eq!(added.location, None);
    assert_eq!(added.notes, None);
    assert_eq!(
        service.edit_target(),
        &EditTarget::Editing {
            day_id: day_id.clone(),
            activity_id: activity_id.clone(),
        }
    );
    assert_eq!(service.editing_activity(), Some(added));
}

#[test]
fn add_activity_to_unknown_day_is_no_op() {
    let mut service = sample_service();
    let before = service.snapshot();

    assert!(service.add_activity(&DayId::from("day-42")).is_err());
    assert_eq!(service.itinerary(), &before);
    assert_eq!(service.edit_target(), &EditTarget::None);
}

#[test]
fn add_activity_applies_configured_defaults() {
    let config = ItineraryConfig {
        default_activity_time: "08:30".to_string(),
        default_activity_title: "Untitled stop".to_string(),
        ..ItineraryConfig::default()
    };
    let mut service = ItineraryService::with_config(sample_itinerary(), config).unwrap();

    service.add_activity(&DayId::from("day-1")).unwrap();

    let added = service.editing_activity().unwrap();
    assert_eq!(added.time, "08:30");
    assert_eq!(added.title, "Untitled stop");
}

#[test]
fn with_config_rejects_invalid_defaults() {
    let config = ItineraryConfig {
        default_activity_time: "25:00".to_string(),
        ..ItineraryConfig::default()
    };
    let err = ItineraryService::with_config(sample_itinerary(), config).unwrap_err();
    assert!(matches!(err, ItineraryServiceError::Config(_)));
}

#[test]
fn update_field_edits_only_the_edit_target() {
    let mut service = sample_service();
    let day_id = DayId::from("day-1");
    let activity_id = ActivityId::from("activity-3");

    service.select_activity(&day_id, &activity_id).unwrap();
    service
        .update_activity_field(&activity_id, ActivityField::Time, "17:15")
        .unwrap();
    service
        .update_activity_field(&activity_id, ActivityField::Location, "")
        .unwrap();

    let edited = service.itinerary().day(&day_id).unwrap().activities[2].clone();
    assert_eq!(edited.id, activity_id);
    assert_eq!(edited.time, "17:15");
    assert_eq!(edited.title, "Visit Eiffel Tower");
    assert_eq!(edited.location, None);

    let err = service
        .update_activity_field(&ActivityId::from("activity-1"), ActivityField::Title, "x")
        .unwrap_err();
    assert!(matches!(err, ItineraryServiceError::NotEditTarget { .. }));
}

#[test]
fn update_field_without_edit_target_is_no_op() {
    let mut service = sample_service();
    let before = service.snapshot();

    let err = service
        .update_activity_field(&ActivityId::from("activity-1"), ActivityField::Title, "x")
        .unwrap_err();
    assert!(matches!(err, ItineraryServiceError::NoEditTarget));
    assert_eq!(service.itinerary(), &before);
}

#[test]
fn select_activity_requires_matching_day() {
    let mut service = sample_service();

    let err = service
        .select_activity(&DayId::from("day-2"), &ActivityId::from("activity-1"))
        .unwrap_err();
    assert!(matches!(
        err,
        ItineraryServiceError::Rejected(ItineraryError::ActivityNotFound { .. })
    ));
    assert_eq!(service.edit_target(), &EditTarget::None);

    service
        .select_activity(&DayId::from("day-1"), &ActivityId::from("activity-1"))
        .unwrap();
    assert!(service.edit_target().is_editing());
    service.clear_selection();
    assert_eq!(service.edit_target(), &EditTarget::None);
}

#[test]
fn delete_activity_clears_edit_target_only_when_targeted() {
    let mut service = sample_service();
    let day_id = DayId::from("day-1");
    service
        .select_activity(&day_id, &ActivityId::from("activity-2"))
        .unwrap();

    service
        .delete_activity(&day_id, &ActivityId::from("activity-1"))
        .unwrap();
    assert_eq!(
        service.edit_target().activity_id(),
        Some(&ActivityId::from("activity-2"))
    );

    service
        .delete_activity(&day_id, &ActivityId::from("activity-2"))
        .unwrap();
    assert_eq!(service.edit_target(), &EditTarget::None);
    assert_eq!(service.itinerary().day(&day_id).unwrap().activities.len(), 2);
}

#[test]
fn delete_activity_rejects_wrong_day() {
    let mut service = sample_service();
    let before = service.snapshot();

    let err = service
        .delete_activity(&DayId::from("day-2"), &ActivityId::from("activity-1"))
        .unwrap_err();
    assert!(matches!(
        err,
        ItineraryServiceError::Rejected(ItineraryError::ActivityNotFound { .. })
    ));
    assert_eq!(service.itinerary(), &before);
}

#[test]
fn delete_day_clears_edit_target_iff_it_pointed_into_that_day() {
    let mut service = sample_service();
    service
        .select_activity(&DayId::from("day-1"), &ActivityId::from("activity-1"))
        .unwrap();

    service.delete_day(&DayId::from("day-2")).unwrap();
    assert!(service.edit_target().is_editing());

    service.delete_day(&DayId::from("day-1")).unwrap();
    assert_eq!(service.edit_target(), &EditTarget::None);
    assert!(service.itinerary().is_empty());
    assert_eq!(service.itinerary().activity_count(), 0);
}

#[test]
fn edit_target_follows_moved_activity() {
    let mut service = sample_service();
    let activity_id = ActivityId::from("activity-2");
    service
        .select_activity(&DayId::from("day-1"), &activity_id)
        .unwrap();

    service
        .move_activity(&DayId::from("day-1"), &DayId::from("day-2"), 1, 0)
        .unwrap();
    assert_eq!(service.edit_target().day_id(), Some(&DayId::from("day-2")));

    service
        .update_activity_field(&activity_id, ActivityField::Notes, "Late check-in")
        .unwrap();
    assert_eq!(
        service.editing_activity().unwrap().notes.as_deref(),
        Some("Late check-in")
    );

    // Deleting the old day no longer affects the moved activity.
    service.delete_day(&DayId::from("day-1")).unwrap();
    assert!(service.edit_target().is_editing());
}

#[test]
fn notices_are_queued_for_add_delete_and_save() {
    let mut service = sample_service();

    service.add_day("Day 3 - Versailles", "June 17, 2025").unwrap();
    service.delete_day(&DayId::from("day-1")).unwrap();
    let saved = service.save();
    assert_eq!(saved.kind, NoticeKind::ItinerarySaved);

    let notices = service.take_notices();
    let kinds: Vec<_> = notices.iter().map(|notice| notice.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NoticeKind::DayAdded,
            NoticeKind::DayRemoved,
            NoticeKind::ItinerarySaved
        ]
    );
    assert_eq!(
        notices[0].description,
        "Day 3 - Versailles has been added to your itinerary."
    );
    assert!(service.take_notices().is_empty());
}

#[test]
fn drop_gestures_dispatch_to_reorders() {
    let mut service = sample_service();

    let cancelled = service
        .apply_drop(&DragResult {
            kind: DragKind::Day,
            source: DropLocation::new("days", 0),
            destination: None,
        })
        .unwrap();
    assert_eq!(cancelled, DropOutcome::Cancelled);

    service
        .apply_drop(&DragResult {
            kind: DragKind::Day,
            source: DropLocation::new("days", 1),
            destination: Some(DropLocation::new("days", 0)),
        })
        .unwrap();
    assert_eq!(service.itinerary().days()[0].id, "day-2");

    service
        .apply_drop(&DragResult {
            kind: DragKind::Activity,
            source: DropLocation::new("day-2", 0),
            destination: Some(DropLocation::new("day-1", 4)),
        })
        .unwrap();
    let day_1 = service.itinerary().day(&DayId::from("day-1")).unwrap();
    assert_eq!(day_1.activities.len(), 5);
    assert_eq!(day_1.activities[4].id, "activity-5");

    let outcome = service
        .apply_drop(&DragResult {
            kind: DragKind::Activity,
            source: DropLocation::new("day-1", 4),
            destination: Some(DropLocation::new("day-1", 0)),
        })
        .unwrap();
    assert_eq!(outcome, DropOutcome::Applied);
    let day_1 = service.itinerary().day(&DayId::from("day-1")).unwrap();
    assert_eq!(day_1.activities[0].id, "activity-5");
    assert_eq!(service.itinerary().activity_count(), 8);
}

#[test]
fn drop_gesture_with_stale_index_is_rejected() {
    let mut service = sample_service();
    let before = service.snapshot();

    let result = service.apply_drop(&DragResult {
        kind: DragKind::Activity,
        source: DropLocation::new("day-1", 7),
        destination: Some(DropLocation::new("day-2", 0)),
    });
    assert!(result.is_err());
    assert_eq!(service.itinerary(), &before);
}
