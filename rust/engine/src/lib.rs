//! # fivecard-engine: Five-Card Poker Hand Evaluation
//!
//! Classifies a five-card poker hand into one of ten categories and orders
//! two hands by strength, breaking ties on grouped card values.
//! Everything here is a pure function over immutable values.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and notation parsing
//! - [`hand`] - Hand validation, classification and comparison
//! - [`errors`] - Validation errors for malformed hands
//! - [`logger`] - Evaluation records serialized as JSON lines
//!
//! ## Quick Start
//!
//! ```rust
//! use fivecard_engine::cards::{Card, Rank, Suit};
//! use fivecard_engine::hand::{classify, HandCategory};
//!
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//! ];
//!
//! assert_eq!(classify(&cards).unwrap(), HandCategory::RoyalFlush);
//! ```
//!
//! ## Comparing Hands
//!
//! ```rust
//! use std::cmp::Ordering;
//! use fivecard_engine::hand::{compare, Hand};
//!
//! let quads: Hand = "Ah Ad Ac As Kh".parse().unwrap();
//! let boat: Hand = "Kh Kd Kc Qs Qh".parse().unwrap();
//! assert_eq!(compare(quads.cards(), boat.cards()).unwrap(), Ordering::Greater);
//! ```

pub mod cards;
pub mod errors;
pub mod hand;
pub mod logger;

pub use errors::ValidationError;
pub use hand::{classify, compare, compare_score, Hand, HandCategory};
