use fivecard_engine::cards::{Card, Rank as R, Suit as S, all_ranks, all_suits};
use fivecard_engine::hand::Hand;

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn rank_first_and_suit_first_notations_agree() {
    let expected = c(S::Hearts, R::Ace);
    for token in ["A♥", "♥A", "Ah", "hA", "aH"] {
        assert_eq!(token.parse::<Card>().unwrap(), expected, "token {}", token);
    }
}

#[test]
fn ten_has_three_spellings() {
    let expected = c(S::Spades, R::Ten);
    for token in ["10♠", "♠10", "Ts", "10s", "s10"] {
        assert_eq!(token.parse::<Card>().unwrap(), expected, "token {}", token);
    }
}

#[test]
fn every_card_round_trips_through_display() {
    for s in all_suits() {
        for r in all_ranks() {
            let card = c(s, r);
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }
}

#[test]
fn hands_accept_commas_and_spaces() {
    let a: Hand = "A♥,K♥,Q♥,J♥,10♥".parse().unwrap();
    let b: Hand = "Ah Kh  Qh\tJh Th".parse().unwrap();
    let d: Hand = "♥A, ♥K, ♥Q, ♥J, ♥10".parse().unwrap();
    assert_eq!(a, b);
    assert_eq!(a, d);
}

#[test]
fn hand_keeps_input_order() {
    let hand: Hand = "2c Ah 9d Ks 5h".parse().unwrap();
    assert_eq!(
        hand.cards(),
        &[
            c(S::Clubs, R::Two),
            c(S::Hearts, R::Ace),
            c(S::Diamonds, R::Nine),
            c(S::Spades, R::King),
            c(S::Hearts, R::Five),
        ]
    );
}

#[test]
fn card_serializes_with_symbols() {
    let json = serde_json::to_string(&c(S::Hearts, R::Ten)).unwrap();
    assert_eq!(json, r#"{"suit":"♥","rank":"10"}"#);
    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c(S::Hearts, R::Ten));
}

#[test]
fn hand_serializes_as_card_list() {
    let hand: Hand = "Ah Kd Qc Js 9h".parse().unwrap();
    let json = serde_json::to_value(hand).unwrap();
    assert_eq!(json.as_array().map(|a| a.len()), Some(5));
    assert_eq!(json[0]["rank"], "A");
    assert_eq!(json[3]["suit"], "♠");
}
