//! # fivecard CLI Library
//!
//! Command-line front end for the `fivecard-engine` hand evaluator.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments, resolves configuration and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = vec!["fivecard", "classify", "Ah", "Kh", "Qh", "Jh", "Th"];
//! let code = fivecard_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("ROYAL_FLUSH"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `classify`: Classify a single five-card hand
//! - `compare`: Compare two hands (1 / 0 / -1)
//! - `batch`: Classify every hand in a file and emit JSONL records
//! - `categories`: List the ten hand categories
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;

use cli::{Commands, FivecardCli};
use commands::{
    handle_batch_command, handle_categories_command, handle_cfg_command, handle_classify_command,
    handle_compare_command,
};
use config::OutputSettings;
pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["classify", "compare", "batch", "categories", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FivecardCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: fivecard <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: fivecard --help");
                    exit_code::ERROR
                }
            };
        }
    };

    // cfg reports configuration problems itself
    if let Commands::Cfg = cli.cmd {
        return match handle_cfg_command(out, err) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            write_or_exit!(err, "Error: {}", CliError::Config(e.to_string()));
            return exit_code::ERROR;
        }
    };
    logging::init_logging(&resolved.config.log_filter);

    let settings = OutputSettings {
        format: cli.format.unwrap_or(resolved.config.format),
        symbols: cli.symbols.unwrap_or(resolved.config.symbols),
    };
    tracing::debug!(command = cli.cmd.name(), ?settings, "dispatching command");

    let result = match cli.cmd {
        Commands::Classify { cards } => handle_classify_command(&cards, settings, out),
        Commands::Compare { a, b } => handle_compare_command(&a, &b, settings, out),
        Commands::Batch { input, output } => {
            handle_batch_command(&input, output.as_deref(), out, err)
        }
        Commands::Categories => handle_categories_command(settings, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut argv = vec!["fivecard"];
        argv.extend_from_slice(args);
        let code = run(argv, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    #[serial]
    fn test_classify_dispatch() {
        let (code, out, _) = run_args(&["classify", "Ah", "Ad", "Ac", "Ks", "Kh"]);
        assert_eq!(code, 0);
        assert!(out.contains("FULL_HOUSE"));
    }

    #[test]
    #[serial]
    fn test_compare_dispatch() {
        let (code, out, _) = run_args(&[
            "compare",
            "--a",
            "Ah Ad Ac As Kh",
            "--b",
            "Kh Kd Kc Ks Ah",
            "--format",
            "json",
        ]);
        assert_eq!(code, 0);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["result"], 1);
    }

    #[test]
    #[serial]
    fn test_invalid_hand_exits_with_error() {
        let (code, out, err) = run_args(&["classify", "Ah", "Kh"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(out.is_empty());
        assert!(err.starts_with("Error: Invalid hand: Invalid card count"));
    }

    #[test]
    #[serial]
    fn test_unknown_command_lists_commands() {
        let (code, _, err) = run_args(&["shuffle"]);
        assert_eq!(code, exit_code::ERROR);
        for c in ["classify", "compare", "batch", "categories", "cfg"] {
            assert!(err.contains(c));
        }
    }

    #[test]
    #[serial]
    fn test_help_goes_to_stdout() {
        let (code, out, err) = run_args(&["--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("classify"));
        assert!(err.is_empty());
    }
}
