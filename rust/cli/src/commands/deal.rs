//! Deal command handler for drawing and displaying cards.
//!
//! This module provides the `deal` command which draws cards from a freshly
//! shuffled deck and displays them, along with the best five-card hand when
//! the drawn pool is evaluable (5 to 7 cards). The command supports optional
//! seeding for deterministic dealing.

use crate::error::CliError;
use showdown_engine::deck::Deck;
use showdown_engine::hand::evaluate_hand;
use std::io::Write;

/// Handle the deal command.
///
/// Draws `count` cards from a deck shuffled under the given seed (a random
/// seed if none is supplied) and prints the seed, the drawn cards, and —
/// for pools of 5 to 7 cards — the best hand evaluation. A single-card
/// request draws from the top of the deck, larger requests draw a batch
/// from the front, per the deck contract.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `count` - Number of cards to draw
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors or when the
/// request exceeds the deck size.
pub fn handle_deal_command(
    seed: Option<u64>,
    count: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    let cards = deck.draw_many(count)?;

    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Cards: {}", codes(&cards))?;

    if (5..=7).contains(&cards.len()) {
        let hs = evaluate_hand(&cards)?;
        writeln!(out, "Best hand: {:?} ({})", hs.category, codes(&hs.cards))?;
    }
    Ok(())
}

fn codes(cards: &[showdown_engine::cards::Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_with_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(42), 7, &mut out);

        assert!(result.is_ok(), "Deal command should succeed");

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed: 42"), "Output should echo the seed");
        assert!(output.contains("Cards:"), "Output should list drawn cards");
        assert!(
            output.contains("Best hand:"),
            "Seven cards should be evaluated"
        );
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(12345), 7, &mut out1).unwrap();
        handle_deal_command(Some(12345), 7, &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_respects_count() {
        let mut out = Vec::new();
        handle_deal_command(Some(7), 3, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let cards_line = output
            .lines()
            .find(|l| l.starts_with("Cards:"))
            .expect("missing cards line");
        assert_eq!(cards_line.split_whitespace().count() - 1, 3);
        assert!(
            !output.contains("Best hand:"),
            "Three cards cannot be evaluated"
        );
    }

    #[test]
    fn test_deal_command_single_card() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(1), 1, &mut out);

        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        let cards_line = output
            .lines()
            .find(|l| l.starts_with("Cards:"))
            .expect("missing cards line");
        assert_eq!(cards_line.split_whitespace().count() - 1, 1);
    }

    #[test]
    fn test_deal_command_without_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(None, 5, &mut out);

        assert!(result.is_ok(), "Deal command should succeed without seed");
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed:"), "Output should report chosen seed");
    }

    #[test]
    fn test_deal_command_overdraw_fails() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(42), 53, &mut out);

        assert!(result.is_err(), "Requesting 53 cards should fail");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Insufficient cards"), "{}", message);
    }
}
