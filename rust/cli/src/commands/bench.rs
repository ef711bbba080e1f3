//! Bench command handler for hand evaluation performance benchmarking.
//!
//! This module provides the `bench` command which performs a quick benchmark
//! of the evaluator by running 200 seeded 7-card draws through the best-hand
//! search and reporting the execution time.

use crate::error::CliError;
use showdown_engine::deck::Deck;
use showdown_engine::hand::evaluate_hand;
use std::io::Write;

/// Handle the bench command.
///
/// Performs a quick benchmark by evaluating 200 unique 7-card pools drawn
/// from deterministically seeded decks, so the workload is reproducible.
/// Reports the number of iterations and total execution time.
///
/// # Arguments
///
/// * `out` - Output stream for benchmark results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_bench_command(out: &mut dyn Write) -> Result<(), CliError> {
    // quick bench: evaluate 200 7-card pools from seeded decks
    let start = std::time::Instant::now();
    let mut cnt = 0u64;
    let mut deck = Deck::new_with_seed(1);
    let mut next_seed = 2;
    for _ in 0..200 {
        if deck.remaining() < 7 {
            deck = Deck::new_with_seed(next_seed);
            next_seed += 1;
        }
        let pool = deck.draw_many(7)?;
        // Result intentionally unused - benchmark only measures performance
        let _ = evaluate_hand(&pool)?;
        cnt += 1;
    }
    let dur = start.elapsed();
    writeln!(out, "Benchmark: {} iters in {:?}", cnt, dur)?;
    Ok(())
}
