use itinerary_core::{
    sample_itinerary, Activity, ActivityValidationError, Day, Itinerary, ItineraryValidationError,
};

#[test]
fn activity_new_sets_defaults() {
    let activity = Activity::new("09:00", "Breakfast");

    assert!(activity.id.as_str().starts_with("activity-"));
    assert_eq!(activity.time, "09:00");
    assert_eq!(activity.title, "Breakfast");
    assert_eq!(activity.location, None);
    assert_eq!(activity.notes, None);
    activity.validate().unwrap();
}

#[test]
fn itinerary_serialization_uses_expected_wire_fields() {
    let itinerary = Itinerary::from_days(vec![Day::with_id("day-1", "Day 1", "June 15, 2025")
        .with_activities(vec![Activity::with_id("activity-1", "09:00", "Arrival")
            .at("Paris, France")])])
    .unwrap();

    let json = serde_json::to_value(&itinerary).unwrap();
    assert_eq!(json["days"][0]["id"], "day-1");
    assert_eq!(json["days"][0]["title"], "Day 1");
    assert_eq!(json["days"][0]["date"], "June 15, 2025");
    let activity = &json["days"][0]["activities"][0];
    assert_eq!(activity["id"], "activity-1");
    assert_eq!(activity["time"], "09:00");
    assert_eq!(activity["location"], "Paris, France");
    assert!(activity["notes"].is_null());

    let decoded: Itinerary = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, itinerary);
}

#[test]
fn sample_itinerary_survives_json_export_and_import() {
    let sample = sample_itinerary();
    let raw = serde_json::to_string(&sample).unwrap();
    let decoded: Itinerary = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, sample);
}

#[test]
fn from_days_rejects_duplicate_activity_ids_across_days() {
    let err = Itinerary::from_days(vec![
        Day::with_id("day-1", "Day 1", "d1")
            .with_activities(vec![Activity::with_id("dup", "09:00", "A")]),
        Day::with_id("day-2", "Day 2", "d2")
            .with_activities(vec![Activity::with_id("dup", "10:00", "B")]),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        ItineraryValidationError::DuplicateActivityId("dup".into())
    );
}

#[test]
fn from_days_rejects_duplicate_and_blank_day_ids() {
    let err = Itinerary::from_days(vec![
        Day::with_id("day-1", "Day 1", "d1"),
        Day::with_id("day-1", "Day 1 again", "d2"),
    ])
    .unwrap_err();
    assert_eq!(err, ItineraryValidationError::DuplicateDayId("day-1".into()));

    let err = Itinerary::from_days(vec![Day::with_id(" ", "Nameless", "d1")]).unwrap_err();
    assert_eq!(err, ItineraryValidationError::BlankDayId);
}

#[test]
fn deserialize_rejects_malformed_time() {
    let value = serde_json::json!({
        "days": [{
            "id": "day-1",
            "title": "Day 1",
            "date": "June 15, 2025",
            "activities": [{
                "id": "activity-1",
                "time": "9am",
                "title": "Arrival",
                "location": null,
                "notes": null
            }]
        }]
    });

    let err = serde_json::from_value::<Itinerary>(value).unwrap_err();
    assert!(
        err.to_string().contains("invalid time `9am`"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_accepts_missing_optional_fields() {
    let value = serde_json::json!({
        "days": [{
            "id": "day-1",
            "title": "Day 1",
            "date": "June 15, 2025"
        }]
    });

    let itinerary: Itinerary = serde_json::from_value(value).unwrap();
    assert_eq!(itinerary.len(), 1);
    assert!(itinerary.days()[0].activities.is_empty());
}

#[test]
fn deserialize_stores_blank_optional_fields_as_none() {
    let value = serde_json::json!({
        "days": [{
            "id": "day-1",
            "title": "Day 1",
            "date": "June 15, 2025",
            "activities": [
                { "id": "a1", "time": "09:00", "title": "T", "location": "  ", "notes": "" },
                { "id": "a2", "time": "10:00", "title": "U", "location": null, "notes": "Bring ID" }
            ]
        }]
    });

    let itinerary: Itinerary = serde_json::from_value(value).unwrap();
    let activities = &itinerary.days()[0].activities;
    assert_eq!(activities[0].location, None);
    assert_eq!(activities[0].notes, None);
    assert_eq!(activities[1].location, None);
    assert_eq!(activities[1].notes.as_deref(), Some("Bring ID"));
}

#[test]
fn validate_surfaces_activity_errors() {
    let err = Itinerary::from_days(vec![Day::with_id("day-1", "Day 1", "d1")
        .with_activities(vec![Activity::with_id("", "09:00", "A")])])
    .unwrap_err();
    assert_eq!(
        err,
        ItineraryValidationError::Activity(ActivityValidationError::BlankId)
    );
}

#[test]
fn locate_activity_reports_day_and_position() {
    let sample = sample_itinerary();
    let (day, position) = sample.locate_activity(&"activity-7".into()).unwrap();
    assert_eq!(day.id, "day-2");
    assert_eq!(position, 2);
    assert!(sample.locate_activity(&"activity-99".into()).is_none());
}
