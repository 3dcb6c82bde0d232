use fivecard_engine::cards::{Card, Rank as R, Suit as S};
use fivecard_engine::hand::{HandCategory, classify};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ace),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Ten),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::RoyalFlush);
}

#[test]
fn mixed_suits_are_not_a_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Ten),
    ];
    let cat = classify(&cards).unwrap();
    assert_ne!(cat, HandCategory::RoyalFlush);
    assert_eq!(cat, HandCategory::Straight);
}

#[test]
fn detects_straight_flush() {
    let cards = [
        c(S::Hearts, R::Nine),
        c(S::Hearts, R::Eight),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Six),
        c(S::Hearts, R::Five),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::StraightFlush);
}

#[test]
fn detects_four_of_a_kind() {
    let cards = [
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Hearts, R::King),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::FourOfAKind);
}

#[test]
fn detects_full_house() {
    let cards = [
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::Ace),
        c(S::Spades, R::King),
        c(S::Hearts, R::King),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::FullHouse);
}

#[test]
fn detects_full_house_with_different_arrangement() {
    let cards = [
        c(S::Spades, R::King),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::Ace),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::FullHouse);
}

#[test]
fn detects_flush() {
    let cards = [
        c(S::Clubs, R::Two),
        c(S::Clubs, R::Seven),
        c(S::Clubs, R::Jack),
        c(S::Clubs, R::Queen),
        c(S::Clubs, R::Nine),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::Flush);
}

#[test]
fn detects_straight() {
    let cards = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::Straight);
}

#[test]
fn detects_wheel_straight() {
    let cards = [
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::Two),
        c(S::Clubs, R::Three),
        c(S::Hearts, R::Four),
        c(S::Spades, R::Five),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::Straight);
}

#[test]
fn broadway_straight_is_detected() {
    let cards = [
        c(S::Spades, R::Ace),
        c(S::Diamonds, R::King),
        c(S::Clubs, R::Queen),
        c(S::Hearts, R::Jack),
        c(S::Spades, R::Ten),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::Straight);
}

#[test]
fn king_ace_two_does_not_wrap() {
    let cards = [
        c(S::Spades, R::King),
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Hearts, R::Three),
        c(S::Spades, R::Four),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::HighCard);
}

#[test]
fn detects_three_of_a_kind() {
    let cards = [
        c(S::Clubs, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Nine),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::ThreeOfAKind);
}

#[test]
fn detects_two_pair() {
    let cards = [
        c(S::Clubs, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Diamonds, R::Four),
        c(S::Spades, R::Four),
        c(S::Clubs, R::Nine),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::TwoPair);
}

#[test]
fn detects_one_pair() {
    let cards = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Seven),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::OnePair);
}

#[test]
fn detects_high_card() {
    let cards = [
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::King),
        c(S::Clubs, R::Queen),
        c(S::Spades, R::Jack),
        c(S::Hearts, R::Nine),
    ];
    assert_eq!(classify(&cards).unwrap(), HandCategory::HighCard);
}

#[test]
fn every_category_is_reachable() {
    let samples = [
        "2h 5d 9c Js Kh",
        "2h 2d 9c Js Kh",
        "2h 2d 9c 9s Kh",
        "2h 2d 2c 9s Kh",
        "6h 7d 8c 9s Th",
        "2h 5h 9h Jh Kh",
        "2h 2d 2c 9s 9h",
        "2h 2d 2c 2s 9h",
        "6h 7h 8h 9h Th",
        "Th Jh Qh Kh Ah",
    ];
    let got: Vec<HandCategory> = samples
        .iter()
        .map(|s| {
            let hand: fivecard_engine::Hand = s.parse().unwrap();
            classify(hand.cards()).unwrap()
        })
        .collect();
    assert_eq!(got, HandCategory::all().to_vec());
}
