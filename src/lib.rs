//! # Naijaweather
//!
//! A terminal dashboard that shows two weather regions next to each other: a
//! domestic one listing Nigerian cities and a foreign one listing world
//! capitals. Each region carries a live local clock, a time-of-day greeting
//! and a randomly generated weather snapshot with a short forecast.
//!
//! ## Architecture
//!
//! - **args**: Command-line parsing
//! - **config**: Configuration loading, validation, and default generation
//! - **constants**: Application-wide constants and defaults
//! - **dashboard**: The UI session holding both regions and the keyboard focus
//! - **display**: Panel rendering for the terminal, plain text, and JSON
//! - **error**: Region-level error kinds
//! - **geo**: City registry and timezone-aware clock helpers
//! - **input**: Keyboard reader thread
//! - **logger**: Structured logging with visual formatting
//! - **region**: Per-region controller and greeting strategies
//! - **signals**: Application events and signal forwarding
//! - **ticker**: Cancellable periodic clock tick
//! - **time_state**: Greeting buckets and the day/night icon
//! - **weather**: Weather conditions and the random snapshot generator

pub mod args;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod geo;
pub mod input;
pub mod logger;
pub mod region;
pub mod signals;
pub mod ticker;
pub mod time_state;
pub mod weather;

// Re-export important types for easier access
pub use config::Config;
pub use dashboard::{Dashboard, Flow};
pub use error::RegionError;
pub use geo::{City, ClockFormat, FixedClock, RegionKind, SystemClock, TimeSource};
pub use logger::{Log, LogLevel};
pub use region::{Domestic, Foreign, GreetingStrategy, RegionController, RegionView};
pub use signals::AppEvent;
pub use time_state::{TimeState, greeting_for, global_greeting_for, icon_for};
pub use weather::{Condition, ForecastDay, RandomSource, WeatherSnapshot, generate};
