//! Built-in sample trip.
//!
//! Starting state for new sessions and the CLI probe: two days in Paris with
//! four activities each, ids `day-N` / `activity-N`.

use crate::model::activity::Activity;
use crate::model::day::Day;
use crate::model::itinerary::Itinerary;

/// Returns the two-day Paris sample itinerary.
pub fn sample_itinerary() -> Itinerary {
    let days = vec![
        Day::with_id("day-1", "Day 1 - Arrival & Eiffel Tower", "June 15, 2025").with_activities(
            vec![
                Activity::with_id("activity-1", "09:00", "Arrival at Charles de Gaulle Airport")
                    .at("Paris, France")
                    .noting("Terminal 2E, Flight AF1234"),
                Activity::with_id("activity-2", "12:00", "Check-in at Hotel")
                    .at("Le Grand Hotel, Paris")
                    .noting("Reservation #12345"),
                Activity::with_id("activity-3", "16:00", "Visit Eiffel Tower")
                    .at("Champ de Mars, Paris")
                    .noting("Pre-booked tickets for sunset view"),
                Activity::with_id("activity-4", "19:30", "Dinner at Le Jules Verne")
                    .at("Eiffel Tower, 2nd Floor")
                    .noting("Reservation at 19:30"),
            ],
        ),
        Day::with_id("day-2", "Day 2 - Louvre & Notre Dame", "June 16, 2025").with_activities(
            vec![
                Activity::with_id("activity-5", "09:00", "Breakfast at Café de Flore")
                    .at("Saint-Germain-des-Prés")
                    .noting("Famous historic café"),
                Activity::with_id("activity-6", "10:30", "Visit the Louvre Museum")
                    .at("Rue de Rivoli")
                    .noting("Don't miss the Mona Lisa!"),
                Activity::with_id("activity-7", "14:00", "Lunch at Angelina")
                    .at("Rue de Rivoli")
                    .noting("Try their famous hot chocolate"),
                Activity::with_id("activity-8", "16:00", "Visit Notre Dame Cathedral")
                    .at("Île de la Cité")
                    .noting("Exterior view only due to reconstruction"),
            ],
        ),
    ];

    Itinerary::from_trusted_days(days)
}
