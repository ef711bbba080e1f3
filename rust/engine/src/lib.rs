//! # showdown-engine: Poker Hand Evaluation Core
//!
//! A pure library for evaluating poker hands: given five to seven cards it
//! finds the best achievable five-card hand, classifies its strength, and
//! provides a total ordering over evaluated hands (including exact ties).
//! Deck construction and shuffling are deterministic under a caller-supplied
//! seed for reproducible tests and replays.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), card text codes,
//!   and full-deck construction
//! - [`deck`] - Seeded deck shuffling and draw operations
//! - [`hand`] - Hand classification, best-hand search, and comparison
//! - [`errors`] - Error types for deck and evaluation operations
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_engine::hand::evaluate_hand;
//!
//! // Evaluate a 7-card pool down to its best 5-card hand
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let strength = evaluate_hand(&cards).unwrap();
//! println!("Best hand: {:?}", strength.category);
//! ```
//!
//! ## Deterministic Shuffling
//!
//! Decks are shuffled at construction time; the same seed produces the
//! same order:
//!
//! ```rust
//! use showdown_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! assert_eq!(d1.draw().unwrap(), d2.draw().unwrap());
//! ```
//!
//! ## Card Codes
//!
//! Cards round-trip through two-character text codes:
//!
//! ```rust
//! use showdown_engine::cards::Card;
//!
//! let card: Card = "Ah".parse().unwrap();
//! assert_eq!(card.to_string(), "Ah");
//! assert!("Xx".parse::<Card>().is_err());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
