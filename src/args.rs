//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

use chrono::{DateTime, Utc};

use crate::logger::Log;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the interactive dashboard
    Run {
        debug_enabled: bool,
        frozen_at: Option<DateTime<Utc>>,
    },
    /// Render a single frame to stdout and exit
    Once {
        debug_enabled: bool,
        json: bool,
        frozen_at: Option<DateTime<Utc>>,
    },
    /// Print the city registry and exit
    ListCities,
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut list_cities = false;
        let mut once = false;
        let mut json = false;
        let mut frozen_at: Option<DateTime<Utc>> = None;
        let mut unknown_arg_found = false;

        // Convert to vector for easier indexed access
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--cities" | "-c" => list_cities = true,
                "--once" | "-o" => once = true,
                "--json" | "-j" => json = true,
                "--at" | "-a" => {
                    // Parse: --at <RFC3339 instant>
                    match args_vec.get(i + 1) {
                        Some(value) => {
                            match DateTime::parse_from_rfc3339(value) {
                                Ok(instant) => frozen_at = Some(instant.with_timezone(&Utc)),
                                Err(_) => {
                                    Log::log_warning(&format!(
                                        "Invalid instant for --at (expected RFC 3339): {}",
                                        value
                                    ));
                                    unknown_arg_found = true;
                                }
                            }
                            i += 1; // Skip the parsed value
                        }
                        None => {
                            Log::log_warning(
                                "Missing argument for --at. Usage: --at <RFC3339 instant>",
                            );
                            unknown_arg_found = true;
                        }
                    }
                }
                _ => {
                    if arg_str.starts_with('-') {
                        Log::log_warning(&format!("Unknown option: {}", arg_str));
                        unknown_arg_found = true;
                    }
                    // Non-option arguments are currently ignored
                }
            }
            i += 1;
        }

        if json && !once {
            Log::log_warning("--json only applies together with --once");
            unknown_arg_found = true;
        }

        // Determine the action based on parsed flags
        let action = if display_version {
            CliAction::ShowVersion
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else if display_help {
            CliAction::ShowHelp
        } else if list_cities {
            CliAction::ListCities
        } else if once {
            CliAction::Once {
                debug_enabled,
                json,
                frozen_at,
            }
        } else {
            CliAction::Run {
                debug_enabled,
                frozen_at,
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    Log::log_version();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    Log::log_version();
    Log::log_block_start(env!("CARGO_PKG_DESCRIPTION"));
    Log::log_block_start("Usage: naijaweather [OPTIONS]");
    Log::log_block_start("Options:");
    Log::log_indented("-a, --at <instant>        Freeze the clock at an RFC 3339 instant");
    Log::log_indented("-c, --cities              List selectable cities and their timezones");
    Log::log_indented("-d, --debug               Enable detailed debug output");
    Log::log_indented("-h, --help                Print help information");
    Log::log_indented("-j, --json                With --once, print the frame as JSON");
    Log::log_indented("-o, --once                Print a single frame and exit");
    Log::log_indented("-V, --version             Print version information");
    Log::log_block_start("Keys:");
    Log::log_indented("Tab / ←/→                 Switch between regions");
    Log::log_indented("↑/↓ or k/j                Previous/next city");
    Log::log_indented("q / Esc / Ctrl-C          Quit");
    Log::log_end();
}
