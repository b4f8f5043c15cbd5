use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use crossterm::{
    ExecutableCommand, cursor,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{
    io::{self, IsTerminal, Write},
    rc::Rc,
    sync::mpsc,
    time::Duration,
};

use naijaweather::{
    args::{CliAction, ParsedArgs, display_help, display_version_info},
    config::Config,
    constants::EXIT_FAILURE,
    dashboard::{Dashboard, Flow},
    display,
    geo::{FixedClock, SystemClock, TimeSource, log_city_table},
    input::KeyReader,
    logger::Log,
    signals::SignalForwarder,
    ticker::Ticker,
};

/// Puts the terminal into raw mode on the alternate screen with a hidden
/// cursor.
///
/// This struct automatically restores the original terminal state when
/// dropped, ensuring clean cleanup even if the main loop bails out early.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        if !io::stdout().is_terminal() {
            anyhow::bail!("the dashboard needs a terminal; use --once for piped output");
        }
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let guard = Self;
        io::stdout()
            .execute(EnterAlternateScreen)?
            .execute(cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best-effort restore of screen, cursor and line discipline
        let mut stdout = io::stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

fn clock_for(frozen_at: Option<DateTime<Utc>>) -> Rc<dyn TimeSource> {
    match frozen_at {
        Some(instant) => {
            Log::log_decorated(&format!("Clock frozen at {}", instant.to_rfc3339()));
            Rc::new(FixedClock(instant))
        }
        None => Rc::new(SystemClock),
    }
}

fn build_dashboard(config: &Config, frozen_at: Option<DateTime<Utc>>) -> Result<Dashboard> {
    let mut dashboard = Dashboard::new(config, clock_for(frozen_at))?;
    // Fill both clocks before the first frame
    dashboard.tick();
    Ok(dashboard)
}

/// Render one frame to stdout and return.
fn run_once(json: bool, frozen_at: Option<DateTime<Utc>>) -> Result<()> {
    let config = Config::load()?;
    config.log_config();
    let dashboard = build_dashboard(&config, frozen_at)?;

    let frame = if json {
        display::render_json(&dashboard)?
    } else {
        display::render_text(&dashboard)
    };
    println!("{}", frame);
    Ok(())
}

/// Run the interactive dashboard until a quit key or a shutdown signal.
fn run_dashboard(frozen_at: Option<DateTime<Utc>>) -> Result<()> {
    Log::log_version();

    let config = Config::load()?;
    config.log_config();
    let mut dashboard = build_dashboard(&config, frozen_at)?;

    let (sender, events) = mpsc::channel();
    let terminal = TerminalGuard::new()?;
    let ticker = Ticker::start(
        Duration::from_secs(config.tick_interval_secs()),
        sender.clone(),
    )?;
    let keys = KeyReader::start(sender.clone())?;
    let signals = SignalForwarder::start(sender)?;

    // The dashboard owns the screen from here on
    Log::set_enabled(false);

    let mut stdout = io::stdout();
    let outcome = (|| -> Result<()> {
        display::draw(&mut stdout, &dashboard)?;
        while let Ok(event) = events.recv() {
            match dashboard.handle_event(event) {
                Flow::Redraw => display::draw(&mut stdout, &dashboard)?,
                Flow::Idle => {}
                Flow::Quit => break,
            }
        }
        Ok(())
    })();

    ticker.cancel();
    drop(keys);
    drop(signals);
    drop(terminal);
    Log::set_enabled(true);

    outcome?;
    Log::log_block_start("Shutting down naijaweather...");
    Log::log_end();
    Ok(())
}

fn main() {
    let parsed = ParsedArgs::from_env();

    let result = match parsed.action {
        CliAction::ShowVersion => {
            display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::ListCities => {
            log_city_table();
            Ok(())
        }
        CliAction::Once {
            debug_enabled,
            json,
            frozen_at,
        } => {
            Log::set_debug(debug_enabled);
            // Keep stdout clean for the frame itself
            Log::set_enabled(debug_enabled && !json);
            run_once(json, frozen_at)
        }
        CliAction::Run {
            debug_enabled,
            frozen_at,
        } => {
            Log::set_debug(debug_enabled);
            run_dashboard(frozen_at)
        }
    };

    if let Err(e) = result {
        Log::set_enabled(true);
        Log::log_pipe();
        Log::log_critical(&format!("{:#}", e));
        Log::log_end();
        std::process::exit(EXIT_FAILURE);
    }
}
