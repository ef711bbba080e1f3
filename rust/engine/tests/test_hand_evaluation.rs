use showdown_engine::cards::{Card, Rank as R, Suit as S};
use showdown_engine::errors::EngineError;
use showdown_engine::hand::{hand_strength, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn detects_high_card() {
    let hs = hand_strength(&[
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Four),
        c(S::Hearts, R::Six),
        c(S::Spades, R::Eight),
        c(S::Clubs, R::Queen),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::HighCard);
    assert_eq!(hs.ranks, vec![vec![12, 8, 6, 4, 2]]);
}

#[test]
fn detects_one_pair() {
    let hs = hand_strength(&[
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Six),
        c(S::Spades, R::Eight),
        c(S::Clubs, R::Queen),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::OnePair);
    assert_eq!(hs.ranks, vec![vec![9], vec![12, 8, 6]]);
}

#[test]
fn detects_two_pair() {
    let hs = hand_strength(&[
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Six),
        c(S::Spades, R::Six),
        c(S::Clubs, R::Queen),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::TwoPair);
    assert_eq!(hs.ranks, vec![vec![9, 6], vec![12]]);
}

#[test]
fn detects_three_of_a_kind() {
    let hs = hand_strength(&[
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Six),
        c(S::Clubs, R::Queen),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::ThreeOfAKind);
    assert_eq!(hs.ranks, vec![vec![9], vec![12, 6]]);
}

#[test]
fn detects_straight() {
    let hs = hand_strength(&[
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Diamonds, R::Seven),
        c(S::Spades, R::Eight),
        c(S::Clubs, R::Nine),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::Straight);
    assert_eq!(hs.ranks, vec![vec![9, 8, 7, 6, 5]]);
}

#[test]
fn detects_flush() {
    let hs = hand_strength(&[
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Nine),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::King),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::Flush);
    assert_eq!(hs.ranks, vec![vec![13, 11, 9, 7, 2]]);
}

#[test]
fn detects_full_house() {
    let hs = hand_strength(&[
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Six),
        c(S::Clubs, R::Six),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::FullHouse);
    assert_eq!(hs.ranks, vec![vec![9], vec![6]]);
}

#[test]
fn detects_four_of_a_kind() {
    let hs = hand_strength(&[
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Clubs, R::King),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::FourOfAKind);
    assert_eq!(hs.ranks, vec![vec![14], vec![13]]);
}

#[test]
fn detects_straight_flush() {
    let hs = hand_strength(&[
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::StraightFlush);
}

#[test]
fn wheel_is_a_straight() {
    let hs = hand_strength(&[
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Two),
        c(S::Hearts, R::Three),
        c(S::Spades, R::Four),
        c(S::Clubs, R::Five),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::Straight);
}

#[test]
fn suited_wheel_is_a_straight_flush() {
    let hs = hand_strength(&[
        c(S::Spades, R::Ace),
        c(S::Spades, R::Two),
        c(S::Spades, R::Three),
        c(S::Spades, R::Four),
        c(S::Spades, R::Five),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::StraightFlush);
}

#[test]
fn ace_high_without_run_is_not_a_straight() {
    // Ace plus a five on top of a broken run must not trip the wheel rule.
    let hs = hand_strength(&[
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Two),
        c(S::Hearts, R::Three),
        c(S::Spades, R::Five),
        c(S::Clubs, R::Six),
    ])
    .unwrap();
    assert_eq!(hs.category, Category::HighCard);
}

#[test]
fn classification_ignores_input_order() {
    let cards = [
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Six),
        c(S::Spades, R::Six),
        c(S::Clubs, R::Queen),
    ];
    let reference = hand_strength(&cards).unwrap();
    let mut rotated = cards;
    for _ in 0..cards.len() {
        rotated.rotate_left(1);
        let hs = hand_strength(&rotated).unwrap();
        assert_eq!(hs.category, reference.category);
        assert_eq!(hs.ranks, reference.ranks);
        assert_eq!(hs.cards, reference.cards);
    }
}

#[test]
fn rejects_wrong_card_counts() {
    let four = [
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Four),
        c(S::Hearts, R::Six),
        c(S::Spades, R::Eight),
    ];
    assert_eq!(
        hand_strength(&four),
        Err(EngineError::InvalidCardCount {
            actual: 4,
            min: 5,
            max: 5,
        })
    );

    let six: Vec<Card> = [R::Two, R::Four, R::Six, R::Eight, R::Ten, R::Queen]
        .iter()
        .map(|&r| c(S::Clubs, r))
        .collect();
    assert_eq!(
        hand_strength(&six),
        Err(EngineError::InvalidCardCount {
            actual: 6,
            min: 5,
            max: 5,
        })
    );
}
