//! The UI session: two regions side by side and the keyboard focus.
//!
//! The dashboard turns [`AppEvent`]s into region transitions. It never touches
//! the terminal itself, which keeps the whole event flow testable without a
//! tty; drawing lives in [`crate::display`].

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::rc::Rc;

use crate::config::Config;
use crate::constants::{DEFAULT_CLOCK_FORMAT, DEFAULT_DOMESTIC_CITY, DEFAULT_FOREIGN_CITY};
use crate::geo::{RegionKind, TimeSource};
use crate::logger::Log;
use crate::region::{Domestic, Foreign, RegionController};
use crate::signals::AppEvent;
use crate::weather::{RandomSource, SeededRandom, ThreadRandom};

/// What the main loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// State changed, draw a new frame
    Redraw,
    /// Nothing visible changed
    Idle,
    /// Leave the main loop
    Quit,
}

pub struct Dashboard {
    domestic: RegionController<Domestic>,
    foreign: RegionController<Foreign>,
    focus: RegionKind,
}

impl Dashboard {
    /// Build both regions from the configuration.
    ///
    /// With a configured `seed` the two regions get distinct reproducible
    /// generators; otherwise both draw from the thread-local generator.
    pub fn new(config: &Config, clock: Rc<dyn TimeSource>) -> Result<Self> {
        let (domestic_random, foreign_random): (Box<dyn RandomSource>, Box<dyn RandomSource>) =
            match config.seed {
                Some(seed) => (
                    Box::new(SeededRandom::new(seed)),
                    Box::new(SeededRandom::new(seed.wrapping_add(1))),
                ),
                None => (Box::new(ThreadRandom), Box::new(ThreadRandom)),
            };
        let clock_format = config.clock_format.unwrap_or(DEFAULT_CLOCK_FORMAT);
        let domestic_city = config.domestic_city.as_deref().unwrap_or(DEFAULT_DOMESTIC_CITY);
        let foreign_city = config.foreign_city.as_deref().unwrap_or(DEFAULT_FOREIGN_CITY);

        let domestic = RegionController::new(
            Domestic,
            Some(domestic_city),
            domestic_random,
            clock.clone(),
            clock_format,
        )
        .context("Failed to initialize the domestic region")?;
        let foreign = RegionController::new(
            Foreign,
            Some(foreign_city),
            foreign_random,
            clock,
            clock_format,
        )
        .context("Failed to initialize the foreign region")?;

        Ok(Self::from_regions(domestic, foreign))
    }

    pub fn from_regions(
        domestic: RegionController<Domestic>,
        foreign: RegionController<Foreign>,
    ) -> Self {
        Self {
            domestic,
            foreign,
            focus: RegionKind::Domestic,
        }
    }

    pub fn domestic(&self) -> &RegionController<Domestic> {
        &self.domestic
    }

    pub fn foreign(&self) -> &RegionController<Foreign> {
        &self.foreign
    }

    pub fn focus(&self) -> RegionKind {
        self.focus
    }

    /// Refresh both clocks. A failing region is faulted and shown as such;
    /// the other region keeps ticking.
    pub fn tick(&mut self) {
        if let Err(e) = self.domestic.tick() {
            Log::log_debug(&format!("Domestic tick skipped: {}", e));
        }
        if let Err(e) = self.foreign.tick() {
            Log::log_debug(&format!("Foreign tick skipped: {}", e));
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Tick => {
                self.tick();
                Flow::Redraw
            }
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Shutdown => Flow::Quit,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Flow::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Flow::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus = match self.focus {
                    RegionKind::Domestic => RegionKind::Foreign,
                    RegionKind::Foreign => RegionKind::Domestic,
                };
                Flow::Redraw
            }
            KeyCode::Down | KeyCode::Char('j') => self.change_city(1),
            KeyCode::Up | KeyCode::Char('k') => self.change_city(-1),
            _ => Flow::Idle,
        }
    }

    fn change_city(&mut self, step: isize) -> Flow {
        let result = match (self.focus, step > 0) {
            (RegionKind::Domestic, true) => self.domestic.select_next(),
            (RegionKind::Domestic, false) => self.domestic.select_previous(),
            (RegionKind::Foreign, true) => self.foreign.select_next(),
            (RegionKind::Foreign, false) => self.foreign.select_previous(),
        };
        if let Err(e) = result {
            Log::log_warning(&format!("City change rejected: {}", e));
            return Flow::Idle;
        }
        Flow::Redraw
    }
}
