use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// A 52-card deck with an owned, seedable RNG. The top of the deck is the
/// end of the internal sequence.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a pre-shuffled deck seeded from ambient entropy.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Creates a pre-shuffled deck with a deterministic seed.
    /// The same seed always yields the same card order.
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let mut deck = Self {
            cards: full_deck(),
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Reshuffles the cards still in the deck, in place. On a partially
    /// drawn deck this reorders the remainder only; drawn cards never
    /// return.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })
    }

    /// Removes and returns `n` cards.
    ///
    /// A single-card request comes off the top (end of the sequence),
    /// matching [`draw`](Self::draw); requests for two or more cards come
    /// off the front. The asymmetry is a documented part of the contract.
    /// Requesting more cards than remain fails without removing any.
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if n > self.cards.len() {
            return Err(EngineError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        if n == 1 {
            return Ok(vec![self.draw()?]);
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Number of cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
