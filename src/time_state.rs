//! Hour-of-day derived state: greetings and the day/night icon.
//!
//! Everything here is a pure function of the local hour, recomputed on every
//! render. Two independent sets of boundaries apply:
//!
//! - **Greeting buckets**: morning before 12:00, afternoon from 12:00 until
//!   17:00, night from 17:00.
//! - **Icon**: day from 06:00 until 18:00, night otherwise.
//!
//! The boundaries deliberately do not line up, so 17:00 greets with "Good
//! night" while still showing the day icon.

use std::fmt;

use serde::Serialize;

use crate::constants::{
    AFTERNOON_START_HOUR, DAY_ICON_END_HOUR, DAY_ICON_START_HOUR, NIGHT_START_HOUR,
};

/// Represents the day/night icon shown next to a greeting.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize)]
pub enum TimeState {
    Day,   // 06:00 up to 18:00
    Night, // everything else
}

impl TimeState {
    pub fn symbol(&self) -> &'static str {
        match self {
            TimeState::Day => "🌞",
            TimeState::Night => "🌙",
        }
    }
}

/// One of the three hour ranges that select the greeting text.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize)]
pub enum GreetingBucket {
    Morning,
    Afternoon,
    Night,
}

impl GreetingBucket {
    pub fn from_hour(hour: u32) -> Self {
        if hour < AFTERNOON_START_HOUR {
            GreetingBucket::Morning
        } else if hour < NIGHT_START_HOUR {
            GreetingBucket::Afternoon
        } else {
            GreetingBucket::Night
        }
    }
}

/// Greeting in English, Igbo, Hausa and Yoruba.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize)]
pub struct LocalizedGreeting {
    pub en: &'static str,
    pub ig: &'static str,
    pub ha: &'static str,
    pub yo: &'static str,
}

impl fmt::Display for LocalizedGreeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {} | {}", self.en, self.ig, self.ha, self.yo)
    }
}

const MORNING: LocalizedGreeting = LocalizedGreeting {
    en: "Good morning",
    ig: "Ụtụtụ ọma",
    ha: "Ina kwana",
    yo: "E kaaro",
};

const AFTERNOON: LocalizedGreeting = LocalizedGreeting {
    en: "Good afternoon",
    ig: "Ehihie ọma",
    ha: "Ina wuni",
    yo: "E kaasan",
};

const NIGHT: LocalizedGreeting = LocalizedGreeting {
    en: "Good night",
    ig: "Mgbede ọma",
    ha: "Ina yini",
    yo: "E kaale",
};

/// Four-language greeting for the domestic region.
pub fn greeting_for(hour: u32) -> LocalizedGreeting {
    match GreetingBucket::from_hour(hour) {
        GreetingBucket::Morning => MORNING,
        GreetingBucket::Afternoon => AFTERNOON,
        GreetingBucket::Night => NIGHT,
    }
}

/// Bilingual English/French greeting for the foreign region.
pub fn global_greeting_for(hour: u32) -> &'static str {
    match GreetingBucket::from_hour(hour) {
        GreetingBucket::Morning => "Good morning / Bonjour",
        GreetingBucket::Afternoon => "Good afternoon / Bon après-midi",
        GreetingBucket::Night => "Good night / Bonsoir",
    }
}

/// Day/night icon for the given local hour.
pub fn icon_for(hour: u32) -> TimeState {
    if (DAY_ICON_START_HOUR..DAY_ICON_END_HOUR).contains(&hour) {
        TimeState::Day
    } else {
        TimeState::Night
    }
}
