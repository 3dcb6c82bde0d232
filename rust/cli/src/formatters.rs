//! Card and hand formatters for terminal display.
//!
//! Pure functions rendering cards with either Unicode suit symbols
//! (♥ ♦ ♣ ♠) or the ASCII letters `h d c s`, selected by [`SymbolStyle`].
//!
//! ## Example
//!
//! ```rust
//! use fivecard_engine::cards::{Card, Rank, Suit};
//! use fivecard_cli::config::SymbolStyle;
//! use fivecard_cli::formatters::format_card;
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert_eq!(format_card(&ace_spades, SymbolStyle::Unicode), "A♠");
//! assert_eq!(format_card(&ace_spades, SymbolStyle::Ascii), "As");
//! ```

use crate::config::SymbolStyle;
use fivecard_engine::cards::{Card, Suit};
use fivecard_engine::hand::{Hand, HandCategory};

pub fn format_suit(suit: Suit, style: SymbolStyle) -> String {
    match style {
        SymbolStyle::Unicode => suit.symbol().to_string(),
        SymbolStyle::Ascii => suit.ascii().to_string(),
    }
}

pub fn format_card(card: &Card, style: SymbolStyle) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit, style))
}

/// Format the five cards of a hand separated by spaces, in input order.
pub fn format_hand(hand: &Hand, style: SymbolStyle) -> String {
    hand.cards()
        .iter()
        .map(|c| format_card(c, style))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable category name, e.g. "Four of a kind".
pub fn describe_category(category: HandCategory) -> &'static str {
    match category {
        HandCategory::HighCard => "High card",
        HandCategory::OnePair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeOfAKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourOfAKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
        HandCategory::RoyalFlush => "Royal flush",
    }
}
