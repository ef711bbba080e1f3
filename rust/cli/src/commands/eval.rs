//! Eval command handler for evaluating hands given as card codes.
//!
//! This module provides the `eval` command which parses 5 to 7 card codes
//! from the command line, finds the best five-card hand, and prints the
//! category and tie-break ranks. With `--json` the full evaluation record
//! is emitted as a single JSON object.

use crate::error::CliError;
use showdown_engine::cards::Card;
use showdown_engine::hand::evaluate_hand;
use std::io::Write;

/// Handle the eval command.
///
/// Parses the given card codes (`Ah`, `Td`, `2c`, ...), evaluates the best
/// five-card hand among them, and writes the result. Malformed codes,
/// duplicate cards, and unsupported card counts all fail with a descriptive
/// error.
///
/// # Arguments
///
/// * `cards` - Card codes, 5 to 7 of them
/// * `json` - Emit the evaluation as JSON instead of text
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on parse, evaluation, or I/O
/// errors.
pub fn handle_eval_command(
    cards: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut pool = Vec::with_capacity(cards.len());
    for code in cards {
        let card: Card = code.parse()?;
        if pool.contains(&card) {
            return Err(CliError::InvalidInput(format!("duplicate card: {}", code)));
        }
        pool.push(card);
    }

    let hs = evaluate_hand(&pool)?;

    if json {
        let line = serde_json::to_string(&hs).map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
    } else {
        let best: Vec<String> = hs.cards.iter().map(|c| c.to_string()).collect();
        writeln!(out, "Best five: {}", best.join(" "))?;
        writeln!(out, "Category: {:?}", hs.category)?;
        writeln!(out, "Ranks: {:?}", hs.ranks)?;
    }
    Ok(())
}
