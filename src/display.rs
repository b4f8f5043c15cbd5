//! Rendering of the two region panels.
//!
//! Panels are first built as plain lines plus a background colour
//! ([`Panel`]), which is what tests and `--once` consume. [`draw`] then paints
//! them onto the terminal with crossterm.

use anyhow::Result;
use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::fmt::Display;
use std::io::Write;

use crate::constants::{BACKGROUND_DEFAULT, PANEL_WIDTH};
use crate::dashboard::Dashboard;
use crate::region::{GreetingStrategy, RegionController, RegionView};
use crate::weather::hex_to_rgb;

const HELP_LINE: &str = "Tab switch region · ↑/↓ change city · q quit";

/// A rendered region: text lines and the condition background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub lines: Vec<String>,
    pub background: &'static str,
}

fn view_lines<P: Display>(view: &RegionView<'_, P>, focused: bool) -> Vec<String> {
    let weather = view.weather;
    let marker = if focused { "▶ " } else { "  " };
    let forecast = weather
        .forecast
        .iter()
        .map(|day| format!("{}: {}°C {}", day.label, day.temperature, day.condition))
        .collect::<Vec<_>>()
        .join("   ");

    vec![
        format!("{}{}", marker, view.title),
        format!("{} {}", view.greeting, view.icon.symbol()),
        format!("Time in {}: {}", view.city.name, view.clock_text),
        format!("City: ‹ {} ›", view.city.name),
        String::new(),
        weather.location.clone(),
        format!("{}°C  {}", weather.temperature, weather.condition),
        format!(
            "Humidity: {}% | Wind: {} km/h",
            weather.humidity, weather.wind_speed_kmh
        ),
        forecast,
    ]
}

/// Build the panel of one region; a faulted region renders its error.
pub fn panel<G: GreetingStrategy>(controller: &RegionController<G>, focused: bool) -> Panel {
    match controller.view() {
        Ok(view) => Panel {
            lines: view_lines(&view, focused),
            background: view.weather.condition.background(),
        },
        Err(e) => Panel {
            lines: vec![
                format!("{}{}", if focused { "▶ " } else { "  " }, controller.title()),
                format!("⚠ {}", e),
            ],
            background: BACKGROUND_DEFAULT,
        },
    }
}

/// Plain-text frame with both panels, as printed by `--once`.
pub fn render_text(dashboard: &Dashboard) -> String {
    let panels = [
        panel(dashboard.domestic(), false),
        panel(dashboard.foreign(), false),
    ];
    panels
        .iter()
        .map(|panel| panel.lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn view_json<G: GreetingStrategy>(controller: &RegionController<G>) -> Result<serde_json::Value> {
    Ok(match controller.view() {
        Ok(view) => serde_json::to_value(&view)?,
        Err(e) => serde_json::json!({ "error": e.to_string() }),
    })
}

/// JSON document with both region views, as printed by `--once --json`.
pub fn render_json(dashboard: &Dashboard) -> Result<String> {
    let document = serde_json::json!({
        "domestic": view_json(dashboard.domestic())?,
        "foreign": view_json(dashboard.foreign())?,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}

fn color_of(hex: &str) -> Color {
    hex_to_rgb(hex)
        .map(|(r, g, b)| Color::Rgb { r, g, b })
        .unwrap_or(Color::White)
}

/// Paint both panels stacked vertically, followed by the key help.
pub fn draw(out: &mut impl Write, dashboard: &Dashboard) -> Result<()> {
    let focus = dashboard.focus();
    let panels = [
        panel(dashboard.domestic(), focus == dashboard.domestic().region()),
        panel(dashboard.foreign(), focus == dashboard.foreign().region()),
    ];

    out.queue(Clear(ClearType::All))?;
    let mut row: u16 = 0;
    for panel in &panels {
        out.queue(SetBackgroundColor(color_of(panel.background)))?
            .queue(SetForegroundColor(Color::Black))?;
        for line in &panel.lines {
            out.queue(MoveTo(0, row))?
                .queue(Print(format!(" {:<width$}", line, width = PANEL_WIDTH)))?;
            row += 1;
        }
        out.queue(ResetColor)?;
        row += 1;
    }
    out.queue(MoveTo(0, row))?.queue(Print(HELP_LINE))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{City, ClockFormat, FixedClock, TimeSource};
    use crate::region::{Domestic, Foreign};
    use crate::weather::ScriptedRandom;
    use chrono::{TimeZone, Utc};
    use std::rc::Rc;

    fn dashboard_at(h: u32) -> Dashboard {
        let clock: Rc<dyn TimeSource> =
            Rc::new(FixedClock(Utc.with_ymd_and_hms(2025, 1, 15, h, 0, 0).unwrap()));
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
        let mut dashboard = Dashboard::from_regions(domestic, foreign);
        dashboard.tick();
        dashboard
    }

    #[test]
    fn test_panel_lines() {
        let dashboard = dashboard_at(8);
        let panel = panel(dashboard.domestic(), true);
        assert_eq!(panel.background, "#ffe066");
        assert_eq!(panel.lines[0], "▶ 🇳🇬 Naija Weather");
        assert_eq!(
            panel.lines[1],
            "Good morning | Ụtụtụ ọma | Ina kwana | E kaaro 🌞"
        );
        assert_eq!(panel.lines[2], "Time in Lagos: 9:00:00 AM");
        assert_eq!(panel.lines[6], "29°C  Sunny");
        assert_eq!(panel.lines[7], "Humidity: 70% | Wind: 15 km/h");
        assert_eq!(panel.lines[8], "Day 1: 31°C Rainy   Day 2: 12°C Cool");
    }

    #[test]
    fn test_render_text_contains_both_regions() {
        let text = render_text(&dashboard_at(20));
        assert!(text.contains("Naija Weather"));
        assert!(text.contains("Global Weather"));
        assert!(text.contains("Good night / Bonsoir 🌙"));
        assert!(text.contains("Time in London: 8:00:00 PM"));
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&dashboard_at(8)).unwrap()).unwrap();
        assert_eq!(json["domestic"]["greeting"]["yo"], "E kaaro");
        assert_eq!(json["domestic"]["icon"], "Day");
        assert_eq!(json["foreign"]["greeting"], "Good morning / Bonjour");
        assert_eq!(json["foreign"]["weather"]["windSpeed"], 15);
    }

    #[test]
    fn test_draw_writes_frame() {
        let dashboard = dashboard_at(8);
        let mut buffer: Vec<u8> = Vec::new();
        draw(&mut buffer, &dashboard).unwrap();
        let output = String::from_utf8_lossy(&buffer);
        assert!(output.contains("Time in Lagos: 9:00:00 AM"));
        assert!(output.contains(HELP_LINE));
    }

    #[test]
    fn test_color_of_falls_back_to_white() {
        assert_eq!(color_of("#70a1ff"), Color::Rgb { r: 0x70, g: 0xa1, b: 0xff });
        assert_eq!(color_of("blue"), Color::White);
    }

    #[test]
    fn test_faulted_region_renders_error_panel() {
        let clock: Rc<dyn TimeSource> =
            Rc::new(FixedClock(Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap()));
        let domestic = RegionController::new(
            Domestic,
            None,
            Box::new(ScriptedRandom::new([29, 0, 70, 15])),
            clock.clone(),
            ClockFormat::TwelveHour,
        )
        .unwrap();
        let mut foreign = RegionController::new(
            Foreign,
            None,
            Box::new(ScriptedRandom::new([29, 0, 70, 15])),
            clock,
            ClockFormat::TwelveHour,
        )
        .unwrap();
        foreign.force_city(City {
            name: "London",
            timezone_id: "Bad/Zone",
        });
        let mut dashboard = Dashboard::from_regions(domestic, foreign);
        dashboard.tick();

        let faulted = panel(dashboard.foreign(), false);
        assert_eq!(
            faulted.lines,
            vec![
                "  🌍 Global Weather".to_string(),
                "⚠ Invalid timezone identifier: Bad/Zone".to_string(),
            ]
        );
        assert_eq!(faulted.background, "#ffffff");

        // The healthy region keeps rendering normally
        assert_eq!(panel(dashboard.domestic(), false).background, "#ffe066");

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&dashboard).unwrap()).unwrap();
        assert_eq!(
            json["foreign"]["error"],
            "Invalid timezone identifier: Bad/Zone"
        );
        assert_eq!(json["domestic"]["city"]["name"], "Lagos");
    }
}
