//! Per-region state machine.
//!
//! A [`RegionController`] owns one region's state: the selected city, the
//! current weather snapshot and the clock text. It reacts to exactly two
//! events:
//!
//! - **City changed**: the city is replaced and a fresh snapshot is generated
//!   synchronously. The clock text is left alone until the next tick.
//! - **Tick**: the clock text is recomputed for the selected city's timezone.
//!   Weather and city are never touched.
//!
//! Greeting and icon are not state. [`RegionController::view`] derives them
//! from the hour read off the time source at call time, so they can never
//! drift from the city or the clock.
//!
//! The domestic and foreign regions differ only in their [`GreetingStrategy`].

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::error::RegionError;
use crate::geo::clock::{self, ClockFormat, TimeSource};
use crate::geo::registry::{self, City, RegionKind};
use crate::logger::Log;
use crate::time_state::{self, LocalizedGreeting, TimeState};
use crate::weather::{self, RandomSource, WeatherSnapshot};

/// Selects a region's city list, title and greeting payload.
pub trait GreetingStrategy {
    type Payload: fmt::Display + Serialize;

    fn region(&self) -> RegionKind;
    fn title(&self) -> &'static str;
    fn greeting_for(&self, hour: u32) -> Self::Payload;
}

/// Naija region: four-language greeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Domestic;

impl GreetingStrategy for Domestic {
    type Payload = LocalizedGreeting;

    fn region(&self) -> RegionKind {
        RegionKind::Domestic
    }

    fn title(&self) -> &'static str {
        "🇳🇬 Naija Weather"
    }

    fn greeting_for(&self, hour: u32) -> LocalizedGreeting {
        time_state::greeting_for(hour)
    }
}

/// Global region: bilingual English/French greeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Foreign;

impl GreetingStrategy for Foreign {
    type Payload = &'static str;

    fn region(&self) -> RegionKind {
        RegionKind::Foreign
    }

    fn title(&self) -> &'static str {
        "🌍 Global Weather"
    }

    fn greeting_for(&self, hour: u32) -> &'static str {
        time_state::global_greeting_for(hour)
    }
}

/// Mutable state of one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionState {
    pub selected_city: City,
    pub weather: WeatherSnapshot,
    pub clock_text: String,
}

/// Render model of a region, with greeting and icon freshly derived.
#[derive(Debug, Serialize)]
pub struct RegionView<'a, P> {
    pub title: &'static str,
    pub region: RegionKind,
    pub city: City,
    pub hour: u32,
    pub greeting: P,
    pub icon: TimeState,
    pub clock_text: &'a str,
    pub weather: &'a WeatherSnapshot,
}

/// Owns and updates the state of a single region.
pub struct RegionController<G: GreetingStrategy> {
    strategy: G,
    state: RegionState,
    random: Box<dyn RandomSource>,
    clock: Rc<dyn TimeSource>,
    clock_format: ClockFormat,
    fault: Option<RegionError>,
}

impl<G: GreetingStrategy> RegionController<G> {
    /// Create a controller on `initial_city`, or the head of the region's list.
    ///
    /// The initial snapshot is generated immediately; the clock text stays
    /// empty until the first tick.
    pub fn new(
        strategy: G,
        initial_city: Option<&str>,
        mut random: Box<dyn RandomSource>,
        clock: Rc<dyn TimeSource>,
        clock_format: ClockFormat,
    ) -> Result<Self, RegionError> {
        let region = strategy.region();
        let selected_city = match initial_city {
            Some(name) => region
                .find(name)
                .ok_or_else(|| RegionError::UnknownCity(name.to_string()))?,
            None => region.cities()[0],
        };
        let weather = weather::generate(selected_city.name, random.as_mut());

        Ok(Self {
            strategy,
            state: RegionState {
                selected_city,
                weather,
                clock_text: String::new(),
            },
            random,
            clock,
            clock_format,
            fault: None,
        })
    }

    pub fn region(&self) -> RegionKind {
        self.strategy.region()
    }

    pub fn title(&self) -> &'static str {
        self.strategy.title()
    }

    pub fn state(&self) -> &RegionState {
        &self.state
    }

    /// The error that stopped this region's clock, if any.
    pub fn fault(&self) -> Option<&RegionError> {
        self.fault.as_ref()
    }

    /// City-changed transition.
    ///
    /// Fails with [`RegionError::UnknownCity`] if `name` is not in this
    /// region's list, leaving the state untouched.
    pub fn select_city(&mut self, name: &str) -> Result<(), RegionError> {
        let city = self
            .region()
            .find(name)
            .ok_or_else(|| RegionError::UnknownCity(name.to_string()))?;

        let weather = weather::generate(city.name, self.random.as_mut());
        self.state.selected_city = city;
        self.state.weather = weather;
        self.fault = None;

        Log::log_debug(&format!(
            "{} region switched to {} ({}, {}°C)",
            self.region(),
            city.name,
            self.state.weather.condition,
            self.state.weather.temperature
        ));
        Ok(())
    }

    /// Select the next city in the region list, wrapping around.
    pub fn select_next(&mut self) -> Result<(), RegionError> {
        let next = registry::cycle(self.region(), self.state.selected_city.name, 1);
        self.select_city(next.name)
    }

    /// Select the previous city in the region list, wrapping around.
    pub fn select_previous(&mut self) -> Result<(), RegionError> {
        let previous = registry::cycle(self.region(), self.state.selected_city.name, -1);
        self.select_city(previous.name)
    }

    /// Tick transition: refresh the clock text only.
    ///
    /// An invalid timezone faults the region; later ticks return the same
    /// error without retrying.
    pub fn tick(&mut self) -> Result<(), RegionError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }

        match clock::time_string_of(
            self.state.selected_city.timezone_id,
            self.clock.now(),
            self.clock_format,
        ) {
            Ok(text) => {
                self.state.clock_text = text;
                Ok(())
            }
            Err(e) => {
                Log::log_error(&format!("{} region clock stopped: {}", self.region(), e));
                self.fault = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Build the render model, deriving greeting and icon from the current hour.
    pub fn view(&self) -> Result<RegionView<'_, G::Payload>, RegionError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }

        let city = self.state.selected_city;
        let hour = clock::hour_of(city.timezone_id, self.clock.now())?;

        Ok(RegionView {
            title: self.strategy.title(),
            region: self.region(),
            city,
            hour,
            greeting: self.strategy.greeting_for(hour),
            icon: time_state::icon_for(hour),
            clock_text: &self.state.clock_text,
            weather: &self.state.weather,
        })
    }
}

#[cfg(test)]
impl<G: GreetingStrategy> RegionController<G> {
    /// Point the region at a city that bypasses registry validation.
    pub(crate) fn force_city(&mut self, city: City) {
        self.state.selected_city = city;
    }
}
