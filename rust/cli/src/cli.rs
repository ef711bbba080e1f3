//! Command-line argument definitions for the `showdown` binary.

use clap::{Parser, Subcommand};

/// Top-level argument parser for the Showdown CLI.
#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Deal, evaluate, and compare poker hands"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal cards from a freshly shuffled deck
    Deal {
        /// RNG seed for a reproducible deal (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of cards to draw
        #[arg(long, default_value_t = 7)]
        count: usize,
    },
    /// Evaluate 5 to 7 card codes (e.g. Ah Kd Ts 9c 2h)
    Eval {
        /// Card codes, rank letter then suit letter
        #[arg(required = true)]
        cards: Vec<String>,
        /// Emit the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Benchmark hand evaluation performance
    Bench,
    /// Verify RNG determinism properties
    Rng {
        /// RNG seed to sample (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}
