//! Random number generator verification command.
//!
//! The `rng` command verifies the properties of the ChaCha20 random number
//! generator that drives deck shuffling. It prints a sample of raw generator
//! output and the first cards of a deck shuffled under the same seed, so two
//! runs with one seed can be compared for determinism.

use crate::error::CliError;
use rand::{RngCore, SeedableRng};
use showdown_engine::deck::Deck;
use std::io::Write;

/// Handle the rng command - verify random number generator properties.
///
/// Generates a sample of random values using the ChaCha20 RNG with the
/// specified seed (or a random seed if not provided), then shows the first
/// cards of a deck shuffled under that seed.
///
/// # Arguments
///
/// * `seed` - Optional seed value for the RNG (uses random seed if None)
/// * `out` - Output stream for the sample values
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(CliError)` on write failure
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let mut vals = vec![];
    for _ in 0..5 {
        vals.push(rng.next_u64());
    }
    writeln!(out, "Seed: {}", s)?;
    writeln!(out, "RNG sample: {:?}", vals)?;

    let mut deck = Deck::new_with_seed(s);
    let tops: Vec<String> = deck
        .draw_many(5)?
        .iter()
        .map(|c| c.to_string())
        .collect();
    writeln!(out, "First cards: {}", tops.join(" "))?;
    Ok(())
}
