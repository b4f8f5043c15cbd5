//! Randomly generated weather snapshots.
//!
//! Weather is simulated locally: every time a region's city changes a fresh
//! [`WeatherSnapshot`] is drawn from an injected [`RandomSource`]. All values
//! are uniform over fixed ranges and the two forecast days are drawn
//! independently of today's condition and of each other.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::constants::{
    BACKGROUND_CLOUDY, BACKGROUND_COOL, BACKGROUND_DEFAULT, BACKGROUND_RAINY, BACKGROUND_STORMY,
    BACKGROUND_SUNNY, BACKGROUND_WINDY, FORECAST_DAYS, HUMIDITY_UPPER, TEMPERATURE_UPPER,
    WIND_SPEED_UPPER,
};

/// Weather condition. Closed set: nothing outside these six is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Condition {
    Sunny,
    Rainy,
    Cloudy,
    Windy,
    Stormy,
    Cool,
}

impl Condition {
    /// All conditions in draw order.
    pub const ALL: [Condition; 6] = [
        Condition::Sunny,
        Condition::Rainy,
        Condition::Cloudy,
        Condition::Windy,
        Condition::Stormy,
        Condition::Cool,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Rainy => "Rainy",
            Condition::Cloudy => "Cloudy",
            Condition::Windy => "Windy",
            Condition::Stormy => "Stormy",
            Condition::Cool => "Cool",
        }
    }

    /// Region background colour for this condition as `#rrggbb`.
    pub fn background(&self) -> &'static str {
        match self {
            Condition::Sunny => BACKGROUND_SUNNY,
            Condition::Rainy => BACKGROUND_RAINY,
            Condition::Cloudy => BACKGROUND_CLOUDY,
            Condition::Windy => BACKGROUND_WINDY,
            Condition::Stormy => BACKGROUND_STORMY,
            Condition::Cool => BACKGROUND_COOL,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|condition| condition.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown weather condition: {}", s))
    }
}

/// Background colour for a condition given by name; unknown names get white.
pub fn background_for_name(name: &str) -> &'static str {
    name.parse::<Condition>()
        .map(|condition| condition.background())
        .unwrap_or(BACKGROUND_DEFAULT)
}

/// Parse a `#rrggbb` colour into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// A uniform value in `[0, upper)`. `upper` is always non-zero.
    fn next_below(&mut self, upper: u32) -> u32;
}

/// The thread-local generator from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_below(&mut self, upper: u32) -> u32 {
        rand::rng().random_range(0..upper)
    }
}

/// Reproducible generator seeded from the configuration.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, upper: u32) -> u32 {
        self.0.random_range(0..upper)
    }
}

/// Replays a fixed script of draws, cycling when it runs out.
///
/// Each scripted value is reduced modulo the requested bound, so a script of
/// indices and in-range values reads naturally in tests.
#[cfg(any(test, feature = "testing-support"))]
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<u32>,
    position: usize,
}

#[cfg(any(test, feature = "testing-support"))]
impl ScriptedRandom {
    pub fn new(script: impl Into<Vec<u32>>) -> Self {
        Self {
            script: script.into(),
            position: 0,
        }
    }
}

#[cfg(any(test, feature = "testing-support"))]
impl RandomSource for ScriptedRandom {
    fn next_below(&mut self, upper: u32) -> u32 {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.position % self.script.len()];
        self.position += 1;
        value % upper
    }
}

/// One forecast entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDay {
    #[serde(rename = "day")]
    pub label: String,
    pub temperature: u32,
    pub condition: Condition,
}

/// A complete generated weather reading for one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature: u32,
    pub condition: Condition,
    pub humidity: u32,
    #[serde(rename = "windSpeed")]
    pub wind_speed_kmh: u32,
    pub forecast: [ForecastDay; FORECAST_DAYS],
}

fn draw_condition(random: &mut dyn RandomSource) -> Condition {
    Condition::ALL[random.next_below(Condition::ALL.len() as u32) as usize]
}

/// Draw a fresh snapshot for `city`.
pub fn generate(city: &str, random: &mut dyn RandomSource) -> WeatherSnapshot {
    let temperature = random.next_below(TEMPERATURE_UPPER);
    let condition = draw_condition(random);
    let humidity = random.next_below(HUMIDITY_UPPER);
    let wind_speed_kmh = random.next_below(WIND_SPEED_UPPER);
    let forecast = std::array::from_fn(|i| ForecastDay {
        label: format!("Day {}", i + 1),
        temperature: random.next_below(TEMPERATURE_UPPER),
        condition: draw_condition(random),
    });

    WeatherSnapshot {
        location: city.to_string(),
        temperature,
        condition,
        humidity,
        wind_speed_kmh,
        forecast,
    }
}
