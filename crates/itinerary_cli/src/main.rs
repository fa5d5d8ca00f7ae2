//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `itinerary_core` linkage.
//! - Print the sample itinerary in schedule order for quick sanity checks.
//!
//! Environment:
//! - `ITINERARY_CONFIG`: optional JSON config document.
//! - `ITINERARY_LOG_DIR`: optional absolute directory; enables file logging.

use itinerary_core::{sample_itinerary, ItineraryConfig, ItineraryService};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("itinerary_core ping={}", itinerary_core::ping());
    println!("itinerary_core version={}", itinerary_core::core_version());

    let config = match std::env::var("ITINERARY_CONFIG") {
        Ok(raw) if !raw.trim().is_empty() => match ItineraryConfig::from_json_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("invalid ITINERARY_CONFIG: {err}");
                return ExitCode::FAILURE;
            }
        },
        _ => ItineraryConfig::default(),
    };

    if let Ok(log_dir) = std::env::var("ITINERARY_LOG_DIR") {
        if let Err(err) = itinerary_core::init_logging(&config.log_level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let service = match ItineraryService::with_config(sample_itinerary(), config) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let itinerary = service.itinerary();
    println!(
        "sample days={} activities={}",
        itinerary.len(),
        itinerary.activity_count()
    );
    for day in itinerary.days() {
        println!("{} [{}] {}", day.id, day.date, day.title);
        for activity in &day.activities {
            println!(
                "  {} {} @ {}",
                activity.time,
                activity.title,
                activity.location.as_deref().unwrap_or("-")
            );
        }
    }
    ExitCode::SUCCESS
}
