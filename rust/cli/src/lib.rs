//! # Showdown CLI Library
//!
//! This library provides the command-line interface for the Showdown hand
//! evaluation engine. It exposes subcommands for dealing cards, evaluating
//! hands supplied as text, benchmarking the evaluator, and verifying RNG
//! determinism.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["showdown", "deal", "--seed", "42"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Draw cards from a seeded deck and show the best hand
//! - `eval`: Evaluate 5 to 7 card codes from the command line
//! - `bench`: Benchmark hand evaluation performance
//! - `rng`: Verify RNG determinism properties

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod error;
mod exit_code;

use cli::{Commands, ShowdownCli};
use commands::{
    handle_bench_command, handle_deal_command, handle_eval_command, handle_rng_command,
};
pub use error::CliError;
use exit_code::{ERROR, SUCCESS};

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
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
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["showdown", "eval", "Ah", "Kh", "Qh", "Jh", "Th"];
/// let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "eval", "bench", "rng"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = ShowdownCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return ERROR;
                    }
                    SUCCESS
                }
                _ => {
                    // Print clap error first
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Showdown Poker CLI").is_err()
                        || writeln!(err, "Usage: showdown <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: showdown --help").is_err() {
                        return ERROR;
                    }
                    ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Deal { seed, count } => match handle_deal_command(seed, count, out) {
                Ok(()) => SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return ERROR;
                    }
                    ERROR
                }
            },
            Commands::Eval { cards, json } => match handle_eval_command(&cards, json, out) {
                Ok(()) => SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return ERROR;
                    }
                    ERROR
                }
            },
            Commands::Bench => match handle_bench_command(out) {
                Ok(()) => SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return ERROR;
                    }
                    ERROR
                }
            },
            Commands::Rng { seed } => match handle_rng_command(seed, out) {
                Ok(()) => SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return ERROR;
                    }
                    ERROR
                }
            },
        },
    }
}
