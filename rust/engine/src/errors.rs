use thiserror::Error;

use crate::cards::Card;

/// Reasons a hand is rejected before it is classified or compared.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid card count: expected {expected}, got {actual}")]
    WrongCardCount { expected: usize, actual: usize },
    #[error("Unknown rank: {0:?}")]
    UnknownRank(String),
    #[error("Unknown suit: {0:?}")]
    UnknownSuit(String),
    #[error("Malformed card: {0:?}")]
    MalformedCard(String),
    #[error("Duplicate card in hand: {0}")]
    DuplicateCard(Card),
}
