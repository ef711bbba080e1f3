use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

/// Hand strength categories in ascending order of strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// The evaluated strength of a five-card hand: its category, the tie-break
/// rank groups, and the cards the result was computed from.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    /// Tie-break rank groups, most significant first; ranks within a group
    /// are sorted high to low.
    pub ranks: Vec<Vec<u8>>,
    /// The five cards evaluated, in rank-ascending order.
    pub cards: [Card; 5],
}

/// Rank histogram of a five-card hand: for each multiplicity (1..=4), the
/// ranks occurring exactly that many times, sorted high to low. Slot 5
/// exists only so that duplicate cards in the input cannot index out of
/// bounds; a deck never produces them.
struct RankHistogram {
    groups: [Vec<u8>; 6],
}

impl RankHistogram {
    fn new(hand: &[Card; 5]) -> Self {
        let mut counts = [0u8; 15];
        for c in hand {
            counts[c.rank.value() as usize] += 1;
        }
        let mut groups: [Vec<u8>; 6] = std::array::from_fn(|_| Vec::new());
        for r in (2..=14u8).rev() {
            let multiplicity = counts[r as usize] as usize;
            if multiplicity > 0 {
                groups[multiplicity].push(r);
            }
        }
        // The multiplicities must partition exactly five cards.
        debug_assert_eq!((1..=5).map(|m| m * groups[m].len()).sum::<usize>(), 5);
        Self { groups }
    }

    fn has(&self, multiplicity: usize) -> bool {
        !self.groups[multiplicity].is_empty()
    }

    fn group(&self, multiplicity: usize) -> Vec<u8> {
        self.groups[multiplicity].clone()
    }
}

/// Evaluates exactly five cards.
///
/// Input order does not matter; the hand is normalized to rank-ascending
/// order before classification. Cards are assumed pairwise distinct, as
/// drawn from a deck. Returns `InvalidCardCount` unless exactly five cards
/// are given.
pub fn hand_strength(cards: &[Card]) -> Result<HandStrength, EngineError> {
    let mut hand: [Card; 5] =
        <[Card; 5]>::try_from(cards).map_err(|_| EngineError::InvalidCardCount {
            actual: cards.len(),
            min: 5,
            max: 5,
        })?;
    hand.sort_unstable_by_key(|c| c.rank.value());
    Ok(classify(hand))
}

/// Finds the best five-card hand in a pool of five to seven cards.
///
/// The pool is reduced recursively: every one-card-removed subpool is
/// solved and the maximum under [`compare_hands`] wins. On exact ties the
/// first subset found in iteration order is kept, so results are
/// reproducible. Returns `InvalidCardCount` for pools outside 5..=7.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandStrength, EngineError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EngineError::InvalidCardCount {
            actual: cards.len(),
            min: 5,
            max: 7,
        });
    }
    Ok(best_hand(cards))
}

/// Compares two evaluated hands: category first, then the rank groups
/// lexicographically (group-major, position-minor, higher rank wins).
pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.ranks.cmp(&b.ranks),
        ord => ord,
    }
}

fn best_hand(pool: &[Card]) -> HandStrength {
    if pool.len() == 5 {
        let mut hand = [pool[0]; 5];
        hand.copy_from_slice(pool);
        hand.sort_unstable_by_key(|c| c.rank.value());
        return classify(hand);
    }

    let mut best = best_hand(&drop_card(pool, 0));
    for skip in 1..pool.len() {
        let candidate = best_hand(&drop_card(pool, skip));
        if compare_hands(&candidate, &best) == Ordering::Greater {
            best = candidate;
        }
    }
    best
}

fn drop_card(pool: &[Card], skip: usize) -> Vec<Card> {
    let mut sub = pool.to_vec();
    sub.remove(skip);
    sub
}

// Classification priority: multiples first (quads, full house, trips, two
// pair, pair), then flush/straight on the rank-sorted hand.
fn classify(hand: [Card; 5]) -> HandStrength {
    let histogram = RankHistogram::new(&hand);

    if histogram.has(4) {
        return HandStrength {
            category: Category::FourOfAKind,
            ranks: vec![histogram.group(4), histogram.group(1)],
            cards: hand,
        };
    }
    if histogram.has(3) && histogram.has(2) {
        return HandStrength {
            category: Category::FullHouse,
            ranks: vec![histogram.group(3), histogram.group(2)],
            cards: hand,
        };
    }
    if histogram.has(3) {
        return HandStrength {
            category: Category::ThreeOfAKind,
            ranks: vec![histogram.group(3), histogram.group(1)],
            cards: hand,
        };
    }
    if histogram.group(2).len() == 2 {
        return HandStrength {
            category: Category::TwoPair,
            ranks: vec![histogram.group(2), histogram.group(1)],
            cards: hand,
        };
    }
    if histogram.has(2) {
        return HandStrength {
            category: Category::OnePair,
            ranks: vec![histogram.group(2), histogram.group(1)],
            cards: hand,
        };
    }

    // All five ranks are distinct here, so the hand is sorted strictly
    // ascending and a span of four means five consecutive ranks. The wheel
    // (A-2-3-4-5) has the ace on top and the five as the run's high card.
    let flush = hand.iter().all(|c| c.suit == hand[0].suit);
    let (low, high) = (hand[0].rank.value(), hand[4].rank.value());
    let straight = high - low == 4 || (high == 14 && hand[3].rank.value() == 5);

    let category = match (flush, straight) {
        (true, true) => Category::StraightFlush,
        (true, false) => Category::Flush,
        (false, true) => Category::Straight,
        (false, false) => Category::HighCard,
    };
    HandStrength {
        category,
        ranks: vec![histogram.group(1)],
        cards: hand,
    }
}
