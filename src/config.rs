//! Configuration system for naijaweather.
//!
//! This module handles the TOML configuration file: locating it, creating a
//! commented default on first run, parsing, validation and logging of the
//! effective settings.
//!
//! ## Configuration Source
//!
//! The configuration lives at **XDG_CONFIG_HOME**/naijaweather/naijaweather.toml
//! (`~/.config/naijaweather/naijaweather.toml` on most systems).
//!
//! ## Configuration Structure
//!
//! ```toml
//! # Regions
//! domestic_city = "Lagos"        # "Lagos", "Abuja" or "Port Harcourt"
//! foreign_city = "London"        # "London", "New York", "Tokyo", "Berlin" or "San Francisco"
//!
//! # Clock
//! tick_interval = 1              # Seconds between clock refreshes (1-60)
//! clock_format = "12h"           # "12h" or "24h"
//!
//! # Weather
//! seed = 42                      # Optional: reproducible weather
//! ```
//!
//! Every key is optional. Invalid values produce an error naming the key and
//! the accepted values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::geo::{ClockFormat, RegionKind};
use crate::logger::Log;

/// Configuration structure for naijaweather application settings.
///
/// Loaded from `naijaweather.toml`. Fields left unset fall back to the
/// defaults in [`crate::constants`].
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Initial city of the domestic region.
    pub domestic_city: Option<String>,
    /// Initial city of the foreign region.
    pub foreign_city: Option<String>,
    pub tick_interval: Option<u64>, // seconds
    pub clock_format: Option<ClockFormat>,
    /// Seed for reproducible weather. Unset means a fresh random draw each run.
    pub seed: Option<u64>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("naijaweather").join("naijaweather.toml"))
    }

    /// Write a commented default configuration to `path`.
    pub fn create_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_content = ConfigBuilder::new()
            .add_section("Regions")
            .add_setting(
                "domestic_city",
                &format!("\"{}\"", DEFAULT_DOMESTIC_CITY),
                &format!("One of: {}", city_choices(RegionKind::Domestic)),
            )
            .add_setting(
                "foreign_city",
                &format!("\"{}\"", DEFAULT_FOREIGN_CITY),
                &format!("One of: {}", city_choices(RegionKind::Foreign)),
            )
            .add_section("Clock")
            .add_setting(
                "tick_interval",
                &DEFAULT_TICK_INTERVAL.to_string(),
                &format!(
                    "Seconds between clock refreshes ({}-{})",
                    MINIMUM_TICK_INTERVAL, MAXIMUM_TICK_INTERVAL
                ),
            )
            .add_setting(
                "clock_format",
                &format!("\"{}\"", DEFAULT_CLOCK_FORMAT.as_str()),
                "\"12h\" (9:05:03 PM) or \"24h\" (21:05:03)",
            )
            .add_section("Weather")
            .add_commented_setting(
                "seed",
                &EXAMPLE_SEED.to_string(),
                "Uncomment for reproducible weather",
            )
            .build();

        fs::write(path, format!("{}\n", config_content))
            .with_context(|| format!("Failed to write default config to {}", path.display()))?;
        Ok(())
    }

    /// Load from a specific path. Does NOT create a default config if missing.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        validate_config(&config)?;

        Ok(config)
    }

    /// Load the user configuration, creating the default file on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)
                .context("Failed to create default config during load")?;
            Log::log_info(&format!(
                "Created default configuration at {}",
                path_for_display(&config_path)
            ));
        }

        Self::load_from_path(&config_path).with_context(|| {
            Log::log_pipe();
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    pub fn tick_interval_secs(&self) -> u64 {
        self.tick_interval.unwrap_or(DEFAULT_TICK_INTERVAL)
    }

    pub fn log_config(&self) {
        let config_path = Self::get_config_path()
            .unwrap_or_else(|_| PathBuf::from("~/.config/naijaweather/naijaweather.toml"));

        Log::log_block_start(&format!(
            "Loaded configuration from {}",
            path_for_display(&config_path)
        ));
        Log::log_indented(&format!(
            "Domestic city: {}",
            self.domestic_city.as_deref().unwrap_or(DEFAULT_DOMESTIC_CITY)
        ));
        Log::log_indented(&format!(
            "Foreign city: {}",
            self.foreign_city.as_deref().unwrap_or(DEFAULT_FOREIGN_CITY)
        ));
        Log::log_indented(&format!(
            "Tick interval: {} seconds",
            self.tick_interval_secs()
        ));
        Log::log_indented(&format!(
            "Clock format: {}",
            self.clock_format.unwrap_or(DEFAULT_CLOCK_FORMAT).as_str()
        ));
        if let Some(seed) = self.seed {
            Log::log_indented(&format!("Weather seed: {}", seed));
        }
    }
}

/// Validate value ranges and region membership of the configured cities.
pub fn validate_config(config: &Config) -> Result<()> {
    for (region, city) in [
        (RegionKind::Domestic, &config.domestic_city),
        (RegionKind::Foreign, &config.foreign_city),
    ] {
        if let Some(name) = city {
            if !region.contains(name) {
                anyhow::bail!(
                    "{}_city = \"{}\" is not a {} city. Choose one of: {}",
                    region.as_str(),
                    name,
                    region.as_str(),
                    city_choices(region)
                );
            }
        }
    }

    if let Some(interval) = config.tick_interval {
        if !(MINIMUM_TICK_INTERVAL..=MAXIMUM_TICK_INTERVAL).contains(&interval) {
            anyhow::bail!(
                "tick_interval must be between {} and {} seconds",
                MINIMUM_TICK_INTERVAL,
                MAXIMUM_TICK_INTERVAL
            );
        }
    }

    Ok(())
}

fn city_choices(region: RegionKind) -> String {
    region
        .cities()
        .iter()
        .map(|city| format!("\"{}\"", city.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Replace the home directory prefix with `~` for display.
pub fn path_for_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

struct ConfigEntry {
    content: String,
    entry_type: EntryType,
}

enum EntryType {
    Section,
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("#[{}]", title),
            entry_type: EntryType::Section,
        });
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        let line = format!("{} = {}", key, value);
        self.entries.push(ConfigEntry {
            content: line.clone(),
            entry_type: EntryType::Setting {
                line,
                comment: format!("# {}", comment),
            },
        });
        self
    }

    /// A setting written commented out, for keys without a default.
    fn add_commented_setting(self, key: &str, value: &str, comment: &str) -> Self {
        self.add_setting(&format!("# {}", key), value, comment)
    }

    fn build(self) -> String {
        // Align all comments one space past the longest setting line
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match &entry.entry_type {
                EntryType::Setting { line, .. } => Some(line.len()),
                EntryType::Section => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry.entry_type {
                EntryType::Section => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(entry.content);
                    first_section = false;
                }
                EntryType::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{}{}{}", line, padding, comment));
                }
            }
        }

        result.join("\n")
    }
}
