//! Application constants and default values for naijaweather.
//!
//! This module contains all the configuration defaults, validation limits,
//! and operational constants used throughout the application.

use crate::geo::ClockFormat;

// ═══ Application Configuration Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_DOMESTIC_CITY: &str = "Lagos";
pub const DEFAULT_FOREIGN_CITY: &str = "London";
pub const DEFAULT_TICK_INTERVAL: u64 = 1; // seconds between clock refreshes
pub const DEFAULT_CLOCK_FORMAT: ClockFormat = ClockFormat::TwelveHour;
pub const EXAMPLE_SEED: u64 = 42; // written commented out into the default config

// ═══ Validation Limits ═══

pub const MINIMUM_TICK_INTERVAL: u64 = 1; // seconds
pub const MAXIMUM_TICK_INTERVAL: u64 = 60; // seconds (the clock shows seconds)

// ═══ Weather Generation Ranges ═══
// Exclusive upper bounds of the uniform draws

pub const TEMPERATURE_UPPER: u32 = 35; // 0..=34 °C
pub const HUMIDITY_UPPER: u32 = 100; // 0..=99 %
pub const WIND_SPEED_UPPER: u32 = 30; // 0..=29 km/h
pub const FORECAST_DAYS: usize = 2;

// ═══ Greeting and Icon Boundaries ═══
// Greeting buckets and the day/night icon use independent boundaries

pub const AFTERNOON_START_HOUR: u32 = 12;
pub const NIGHT_START_HOUR: u32 = 17;
pub const DAY_ICON_START_HOUR: u32 = 6;
pub const DAY_ICON_END_HOUR: u32 = 18; // exclusive

// ═══ Condition Background Colours ═══

pub const BACKGROUND_SUNNY: &str = "#ffe066"; // warm yellow
pub const BACKGROUND_RAINY: &str = "#a4b0be"; // grey-blue
pub const BACKGROUND_CLOUDY: &str = "#dfe4ea"; // light grey
pub const BACKGROUND_WINDY: &str = "#70a1ff"; // blue
pub const BACKGROUND_STORMY: &str = "#57606f"; // dark grey
pub const BACKGROUND_COOL: &str = "#cce5ff"; // pale blue
pub const BACKGROUND_DEFAULT: &str = "#ffffff";

// ═══ Operational Timing Constants ═══

pub const CHECK_INTERVAL_MS: u64 = 100; // How often helper threads check their running flag
pub const INPUT_POLL_MS: u64 = 100; // Keyboard poll timeout

// ═══ User Interface Constants ═══

pub const PANEL_WIDTH: usize = 48; // Characters width of a region panel

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1; // General failure
