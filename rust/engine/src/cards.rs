use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no ordering weight during evaluation; they only matter for flushes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Unicode symbol for the suit.
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }

    /// Single-letter ASCII form (`h`, `d`, `c`, `s`).
    pub fn ascii(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }
}

impl FromStr for Suit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "♥" | "h" | "H" => Ok(Suit::Hearts),
            "♦" | "d" | "D" => Ok(Suit::Diamonds),
            "♣" | "c" | "C" => Ok(Suit::Clubs),
            "♠" | "s" | "S" => Ok(Suit::Spades),
            other => Err(ValidationError::UnknownSuit(other.to_string())),
        }
    }
}

impl TryFrom<String> for Suit {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Suit> for String {
    fn from(suit: Suit) -> Self {
        suit.symbol().to_string()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the rank's strength value used by hand evaluation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Strength value of the rank: face value for numerals, 11..=14 for J, Q, K, A.
    pub fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl FromStr for Rank {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" | "t" => Ok(Rank::Ten),
            "J" | "j" => Ok(Rank::Jack),
            "Q" | "q" => Ok(Rank::Queen),
            "K" | "k" => Ok(Rank::King),
            "A" | "a" => Ok(Rank::Ace),
            other => Err(ValidationError::UnknownRank(other.to_string())),
        }
    }
}

impl TryFrom<String> for Rank {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.symbol().to_string()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are immutable values; two cards are equal when both fields match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Hearts, Diamonds, Clubs or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses a single card token.
///
/// Both rank-first (`A♥`, `Ah`, `10h`, `Th`) and suit-first (`♥A`, `h10`)
/// notations are accepted.
impl FromStr for Card {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let chars: Vec<char> = token.chars().collect();
        if chars.len() < 2 || chars.len() > 3 {
            return Err(ValidationError::MalformedCard(token.to_string()));
        }

        let first = chars[0].to_string();
        let last = chars[chars.len() - 1].to_string();
        if let (Ok(suit), Err(_)) = (last.parse::<Suit>(), first.parse::<Suit>()) {
            let rank: String = chars[..chars.len() - 1].iter().collect();
            return Ok(Card::new(suit, rank.parse()?));
        }
        if let Ok(suit) = first.parse::<Suit>() {
            let rank: String = chars[1..].iter().collect();
            return Ok(Card::new(suit, rank.parse()?));
        }

        // Neither end names a suit: blame whichever part is unrecognised.
        let rank: String = chars[..chars.len() - 1].iter().collect();
        rank.parse::<Rank>()?;
        Err(ValidationError::UnknownSuit(last))
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_cover_two_through_ace() {
        let values: Vec<u8> = all_ranks().iter().map(|r| r.value()).collect();
        assert_eq!(values, (2..=14).collect::<Vec<u8>>());
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn rank_value_matches_discriminant() {
        for r in all_ranks() {
            assert_eq!(r.value(), r as u8);
            assert_eq!(Rank::from_value(r.value()), Some(r));
        }
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn suit_symbols() {
        assert_eq!(Suit::Hearts.symbol(), "♥");
        assert_eq!(Suit::Diamonds.symbol(), "♦");
        assert_eq!(Suit::Clubs.symbol(), "♣");
        assert_eq!(Suit::Spades.symbol(), "♠");
        for s in all_suits() {
            assert_eq!(s.symbol().parse::<Suit>(), Ok(s));
            assert_eq!(s.ascii().to_string().parse::<Suit>(), Ok(s));
        }
    }

    #[test]
    fn symbols_parse_back() {
        for r in all_ranks() {
            assert_eq!(r.symbol().parse::<Rank>(), Ok(r));
        }
        assert_eq!("T".parse::<Rank>(), Ok(Rank::Ten));
        assert!(matches!("1".parse::<Rank>(), Err(ValidationError::UnknownRank(s)) if s == "1"));
    }

    #[test]
    fn full_deck_has_52_distinct_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        let uniq: std::collections::HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(uniq.len(), 52);
    }

    #[test]
    fn card_display_is_rank_then_suit() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Ace).to_string(), "A♥");
        assert_eq!(Card::new(Suit::Spades, Rank::Ten).to_string(), "10♠");
    }
}
