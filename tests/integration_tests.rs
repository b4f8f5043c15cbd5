use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serial_test::serial;
use std::fs;
use std::rc::Rc;
use tempfile::tempdir;

use naijaweather::{
    AppEvent, ClockFormat, Config, Dashboard, Domestic, FixedClock, Flow, Foreign, RegionController,
    RegionError, TimeSource, TimeState,
    display::{render_json, render_text},
    weather::ScriptedRandom,
};

fn create_test_config_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("naijaweather").join("naijaweather.toml");

    // Create directory structure
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, content).unwrap();

    (temp_dir, config_path)
}

fn clock_at(h: u32, m: u32) -> Rc<dyn TimeSource> {
    Rc::new(FixedClock(Utc.with_ymd_and_hms(2025, 1, 15, h, m, 0).unwrap()))
}

fn scripted_regions(clock: Rc<dyn TimeSource>) -> Dashboard {
    let script = [29, 0, 70, 15, 31, 1, 12, 5];
    let domestic = RegionController::new(
        Domestic,
        None,
        Box::new(ScriptedRandom::new(script)),
        clock.clone(),
        ClockFormat::TwelveHour,
    )
    .unwrap();
    let foreign = RegionController::new(
        Foreign,
        None,
        Box::new(ScriptedRandom::new(script)),
        clock,
        ClockFormat::TwelveHour,
    )
    .unwrap();
    Dashboard::from_regions(domestic, foreign)
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_integration_lagos_morning() {
    // 07:30 UTC is 08:30 in Lagos
    let mut dashboard = scripted_regions(clock_at(7, 30));
    dashboard.tick();

    let view = dashboard.domestic().view().unwrap();
    assert_eq!(view.city.name, "Lagos");
    assert_eq!(view.hour, 8);
    assert_eq!(view.greeting.en, "Good morning");
    assert_eq!(view.greeting.yo, "E kaaro");
    assert_eq!(view.icon, TimeState::Day);
    assert_eq!(view.clock_text, "8:30:00 AM");
    assert_eq!(view.weather.temperature, 29);
}

#[test]
fn test_integration_london_evening() {
    let mut dashboard = scripted_regions(clock_at(20, 0));
    dashboard.tick();

    let view = dashboard.foreign().view().unwrap();
    assert_eq!(view.city.name, "London");
    assert_eq!(view.greeting, "Good night / Bonsoir");
    assert_eq!(view.icon, TimeState::Night);
    assert_eq!(view.clock_text, "8:00:00 PM");
}

#[test]
fn test_integration_same_instant_differs_per_timezone() {
    // 16:30 UTC: 17:30 in Lagos is night, 16:30 in London is still afternoon
    let mut dashboard = scripted_regions(clock_at(16, 30));
    dashboard.handle_event(key(KeyCode::Tab));
    dashboard.handle_event(key(KeyCode::Down)); // New York, 11:30
    dashboard.tick();

    let domestic = dashboard.domestic().view().unwrap();
    let foreign = dashboard.foreign().view().unwrap();
    assert_eq!(domestic.greeting.en, "Good night");
    assert_eq!(domestic.icon, TimeState::Day);
    assert_eq!(foreign.city.name, "New York");
    assert_eq!(foreign.greeting, "Good morning / Bonjour");
    assert_eq!(foreign.clock_text, "11:30:00 AM");
}

#[test]
fn test_integration_ticks_leave_weather_alone() {
    let mut dashboard = scripted_regions(clock_at(12, 0));
    let before = dashboard.domestic().state().weather.clone();

    for _ in 0..5 {
        assert_eq!(dashboard.handle_event(AppEvent::Tick), Flow::Redraw);
    }

    assert_eq!(dashboard.domestic().state().weather, before);
    let clock_text = dashboard.domestic().state().clock_text.clone();
    dashboard.tick();
    assert_eq!(dashboard.domestic().state().clock_text, clock_text);
}

#[test]
fn test_integration_city_cycle_wraps() {
    let mut dashboard = scripted_regions(clock_at(12, 0));
    for expected in ["Abuja", "Port Harcourt", "Lagos"] {
        dashboard.handle_event(key(KeyCode::Char('j')));
        assert_eq!(dashboard.domestic().state().selected_city.name, expected);
        assert_eq!(dashboard.domestic().state().weather.location, expected);
    }
    dashboard.handle_event(key(KeyCode::Char('k')));
    assert_eq!(
        dashboard.domestic().state().selected_city.name,
        "Port Harcourt"
    );
}

#[test]
fn test_integration_unknown_city_rejected() {
    let mut controller = RegionController::new(
        Foreign,
        None,
        Box::new(ScriptedRandom::new([1, 2, 3])),
        clock_at(12, 0),
        ClockFormat::TwentyFourHour,
    )
    .unwrap();
    let before = controller.state().clone();

    assert_eq!(
        controller.select_city("Lagos"),
        Err(RegionError::UnknownCity("Lagos".to_string()))
    );
    assert_eq!(controller.state(), &before);
}

#[test]
fn test_integration_once_renderers() {
    let mut dashboard = scripted_regions(clock_at(7, 30));
    dashboard.tick();

    let text = render_text(&dashboard);
    assert!(text.contains("Good morning | Ụtụtụ ọma | Ina kwana | E kaaro 🌞"));
    assert!(text.contains("Good morning / Bonjour 🌞"));

    let json: serde_json::Value = serde_json::from_str(&render_json(&dashboard).unwrap()).unwrap();
    assert_eq!(json["domestic"]["city"]["name"], "Lagos");
    assert_eq!(json["foreign"]["region"], "foreign");
    assert_eq!(json["foreign"]["weather"]["forecast"][0]["day"], "Day 1");
}

#[test]
#[serial]
fn test_integration_config_selects_cities_and_format() {
    let config_content = r#"
domestic_city = "Port Harcourt"
foreign_city = "Tokyo"
tick_interval = 5
clock_format = "24h"
seed = 42
"#;

    let (_temp_dir, config_path) = create_test_config_file(config_content);
    let config = Config::load_from_path(&config_path).unwrap();

    assert_eq!(config.domestic_city.as_deref(), Some("Port Harcourt"));
    assert_eq!(config.tick_interval_secs(), 5);
    assert_eq!(config.clock_format, Some(ClockFormat::TwentyFourHour));

    let mut dashboard = Dashboard::new(&config, clock_at(20, 15)).unwrap();
    dashboard.tick();
    assert_eq!(dashboard.foreign().state().selected_city.name, "Tokyo");
    // 20:15 UTC is 05:15 the next day in Tokyo
    assert_eq!(dashboard.foreign().state().clock_text, "05:15:00");
    assert_eq!(dashboard.domestic().state().clock_text, "21:15:00");
}

#[test]
#[serial]
fn test_integration_seed_is_reproducible() {
    let (_temp_dir, config_path) = create_test_config_file("seed = 1234\n");
    let config = Config::load_from_path(&config_path).unwrap();

    let first = Dashboard::new(&config, clock_at(12, 0)).unwrap();
    let second = Dashboard::new(&config, clock_at(12, 0)).unwrap();
    assert_eq!(
        first.domestic().state().weather,
        second.domestic().state().weather
    );
    assert_eq!(
        first.foreign().state().weather,
        second.foreign().state().weather
    );
}

#[test]
#[serial]
fn test_integration_config_rejects_bad_values() {
    for content in [
        "domestic_city = \"London\"\n",
        "foreign_city = \"Abuja\"\n",
        "tick_interval = 0\n",
        "tick_interval = 61\n",
        "clock_format = \"36h\"\n",
        "update_interval = 60\n",
    ] {
        let (_temp_dir, config_path) = create_test_config_file(content);
        assert!(
            Config::load_from_path(&config_path).is_err(),
            "accepted invalid config: {}",
            content
        );
    }
}

#[test]
fn test_integration_missing_config_path_is_an_error() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("absent.toml");
    assert!(Config::load_from_path(&missing).is_err());
}
