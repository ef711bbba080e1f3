use showdown_engine::cards::{Card, Rank, Suit};
use showdown_engine::hand::{evaluate_hand, Category, HandStrength};

#[test]
fn card_round_trips_through_json() {
    let card = Card {
        suit: Suit::Hearts,
        rank: Rank::Ace,
    };
    let json = serde_json::to_string(&card).unwrap();
    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(card, back);
}

#[test]
fn category_serializes_as_variant_name() {
    let json = serde_json::to_string(&Category::StraightFlush).unwrap();
    assert_eq!(json, "\"StraightFlush\"");
}

#[test]
fn hand_strength_round_trips_through_json() {
    let pool = [
        Card {
            suit: Suit::Hearts,
            rank: Rank::Ace,
        },
        Card {
            suit: Suit::Hearts,
            rank: Rank::King,
        },
        Card {
            suit: Suit::Hearts,
            rank: Rank::Queen,
        },
        Card {
            suit: Suit::Hearts,
            rank: Rank::Jack,
        },
        Card {
            suit: Suit::Hearts,
            rank: Rank::Ten,
        },
        Card {
            suit: Suit::Clubs,
            rank: Rank::Two,
        },
        Card {
            suit: Suit::Diamonds,
            rank: Rank::Three,
        },
    ];
    let hs = evaluate_hand(&pool).unwrap();
    let json = serde_json::to_string(&hs).unwrap();
    let back: HandStrength = serde_json::from_str(&json).unwrap();
    assert_eq!(hs, back);
    assert_eq!(back.category, Category::StraightFlush);
}
