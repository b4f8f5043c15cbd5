//! City and timezone handling.
//!
//! This module provides functionality for:
//! - The static registry of selectable cities and their timezones
//! - Local hour and clock text for a timezone at a given instant

pub mod clock;
pub mod registry;

pub use clock::{ClockFormat, FixedClock, SystemClock, TimeSource};
pub use registry::{City, DOMESTIC_CITIES, FOREIGN_CITIES, RegionKind};

use crate::logger::Log;

/// Print both city lists with their timezones (`--cities`).
pub fn log_city_table() {
    Log::log_version();
    for region in [RegionKind::Domestic, RegionKind::Foreign] {
        Log::log_block_start(&format!("{} cities:", capitalize(region.as_str())));
        for city in region.cities() {
            Log::log_indented(&format!("{:<15} {}", city.name, city.timezone_id));
        }
    }
    Log::log_end();
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
