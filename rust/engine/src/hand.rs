use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, Rank};
use crate::errors::ValidationError;

pub const HAND_SIZE: usize = 5;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Ordinal strength, 0 (high card) through 9 (royal flush).
    pub fn strength(self) -> u8 {
        match self {
            HandCategory::HighCard => 0,
            HandCategory::OnePair => 1,
            HandCategory::TwoPair => 2,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::Straight => 4,
            HandCategory::Flush => 5,
            HandCategory::FullHouse => 6,
            HandCategory::FourOfAKind => 7,
            HandCategory::StraightFlush => 8,
            HandCategory::RoyalFlush => 9,
        }
    }

    pub fn from_strength(v: u8) -> Option<HandCategory> {
        HandCategory::all().into_iter().find(|c| c.strength() == v)
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "HIGH_CARD",
            HandCategory::OnePair => "ONE_PAIR",
            HandCategory::TwoPair => "TWO_PAIR",
            HandCategory::ThreeOfAKind => "THREE_OF_A_KIND",
            HandCategory::Straight => "STRAIGHT",
            HandCategory::Flush => "FLUSH",
            HandCategory::FullHouse => "FULL_HOUSE",
            HandCategory::FourOfAKind => "FOUR_OF_A_KIND",
            HandCategory::StraightFlush => "STRAIGHT_FLUSH",
            HandCategory::RoyalFlush => "ROYAL_FLUSH",
        }
    }

    /// All categories, weakest first.
    pub fn all() -> [HandCategory; 10] {
        [
            HandCategory::HighCard,
            HandCategory::OnePair,
            HandCategory::TwoPair,
            HandCategory::ThreeOfAKind,
            HandCategory::Straight,
            HandCategory::Flush,
            HandCategory::FullHouse,
            HandCategory::FourOfAKind,
            HandCategory::StraightFlush,
            HandCategory::RoyalFlush,
        ]
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Five distinct cards that passed validation.
///
/// The only ways to obtain a `Hand` are [`Hand::new`], [`FromStr`] and the
/// `TryFrom` conversions, all of which reject wrong card counts and
/// duplicate cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, ValidationError> {
        validate_cards(cards)?;
        let mut arr = [cards[0]; HAND_SIZE];
        arr.copy_from_slice(cards);
        Ok(Self { cards: arr })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn rank_counts(&self) -> RankCounts {
        RankCounts::from_cards(&self.cards)
    }

    pub fn category(&self) -> HandCategory {
        classify_cards(&self.cards, &self.rank_counts())
    }

    /// Five rank values ordered for tie-breaking: larger groups first, then
    /// higher values. Aces always count as 14 here, including in a wheel.
    pub fn tie_break_key(&self) -> [u8; HAND_SIZE] {
        self.rank_counts().tie_break_key()
    }

    pub fn strength(&self) -> HandStrength {
        let counts = self.rank_counts();
        HandStrength {
            category: classify_cards(&self.cards, &counts),
            kickers: counts.tie_break_key(),
        }
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = ValidationError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(&cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = ValidationError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

/// Parses cards separated by whitespace and/or commas, e.g. `"A♥ K♥ Q♥ J♥ 10♥"`
/// or `"Ah,Kh,Qh,Jh,Th"`.
impl FromStr for Hand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Occurrence count of every rank in a hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RankCounts {
    counts: [u8; 15], // indexed by rank value, 2..=14 used
}

impl RankCounts {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.rank.value() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Ranks present in the hand with their counts, highest rank first.
    pub fn groups(&self) -> Vec<(Rank, u8)> {
        (2..=14u8)
            .rev()
            .filter(|&v| self.counts[v as usize] > 0)
            .filter_map(|v| Rank::from_value(v).map(|r| (r, self.counts[v as usize])))
            .collect()
    }

    /// Number of distinct ranks that occur exactly `n` times.
    pub fn ranks_with_count(&self, n: u8) -> usize {
        self.counts.iter().filter(|&&c| c == n).count()
    }

    pub fn has_count(&self, n: u8) -> bool {
        self.ranks_with_count(n) > 0
    }

    /// The multiset of counts, largest first (e.g. `[3, 2]` for a full house).
    pub fn profile(&self) -> Vec<u8> {
        let mut p: Vec<u8> = self.counts.iter().copied().filter(|&c| c > 0).collect();
        p.sort_unstable_by(|a, b| b.cmp(a));
        p
    }

    fn tie_break_key(&self) -> [u8; HAND_SIZE] {
        let mut groups: Vec<(u8, u8)> = self
            .groups()
            .into_iter()
            .map(|(r, c)| (r.value(), c))
            .collect();
        groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        let expanded = groups
            .iter()
            .flat_map(|&(v, c)| std::iter::repeat(v).take(c as usize));
        let mut key = [0u8; HAND_SIZE];
        for (slot, v) in key.iter_mut().zip(expanded) {
            *slot = v;
        }
        key
    }
}

/// Category plus tie-break key. The derived ordering compares the category
/// first and then the kickers lexicographically.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: HandCategory,
    // kickers: grouped rank values for tiebreaks
    pub kickers: [u8; HAND_SIZE],
}

pub fn evaluate(hand: &Hand) -> HandStrength {
    hand.strength()
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Validates and classifies five cards.
pub fn classify(cards: &[Card]) -> Result<HandCategory, ValidationError> {
    let hand = Hand::new(cards).inspect_err(|e| debug!(error = %e, "rejected hand"))?;
    let category = hand.category();
    debug!(hand = %hand, %category, "classified hand");
    Ok(category)
}

/// Orders two hands. `Ordering::Greater` means `a` beats `b`.
///
/// Both hands are validated before anything is compared; the first invalid
/// hand's error is returned.
pub fn compare(a: &[Card], b: &[Card]) -> Result<Ordering, ValidationError> {
    let ha = Hand::new(a).inspect_err(|e| debug!(error = %e, "rejected first hand"))?;
    let hb = Hand::new(b).inspect_err(|e| debug!(error = %e, "rejected second hand"))?;
    let (sa, sb) = (ha.strength(), hb.strength());
    let ord = compare_hands(&sa, &sb);
    debug!(a = %ha, b = %hb, category_a = %sa.category, category_b = %sb.category, ?ord, "compared hands");
    Ok(ord)
}

/// [`compare`] rendered as 1 (a wins), 0 (tie) or -1 (b wins).
pub fn compare_score(a: &[Card], b: &[Card]) -> Result<i8, ValidationError> {
    compare(a, b).map(|ord| ord as i8)
}

fn validate_cards(cards: &[Card]) -> Result<(), ValidationError> {
    if cards.len() != HAND_SIZE {
        return Err(ValidationError::WrongCardCount {
            expected: HAND_SIZE,
            actual: cards.len(),
        });
    }
    let mut seen = HashSet::with_capacity(HAND_SIZE);
    for &c in cards {
        if !seen.insert((c.rank, c.suit)) {
            return Err(ValidationError::DuplicateCard(c));
        }
    }
    Ok(())
}

// Strongest category first; the first matching check wins.
fn classify_cards(cards: &[Card; HAND_SIZE], counts: &RankCounts) -> HandCategory {
    let flush = is_flush(cards);
    let straight = is_straight(cards);

    if flush && is_royal(cards) {
        return HandCategory::RoyalFlush;
    }
    if flush && straight {
        return HandCategory::StraightFlush;
    }
    if counts.has_count(4) {
        return HandCategory::FourOfAKind;
    }
    if counts.profile() == [3, 2] {
        return HandCategory::FullHouse;
    }
    if flush {
        return HandCategory::Flush;
    }
    if straight {
        return HandCategory::Straight;
    }
    if counts.has_count(3) {
        return HandCategory::ThreeOfAKind;
    }
    if counts.ranks_with_count(2) == 2 {
        return HandCategory::TwoPair;
    }
    if counts.has_count(2) {
        return HandCategory::OnePair;
    }
    HandCategory::HighCard
}

fn sorted_values(cards: &[Card; HAND_SIZE]) -> [u8; HAND_SIZE] {
    let mut v = cards.map(|c| c.rank.value());
    v.sort_unstable();
    v
}

fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

fn is_royal(cards: &[Card; HAND_SIZE]) -> bool {
    sorted_values(cards) == [10, 11, 12, 13, 14]
}

fn is_straight(cards: &[Card; HAND_SIZE]) -> bool {
    let v = sorted_values(cards);
    if is_consecutive(&v) {
        return true;
    }
    // Ace-low: retry with the Ace counted as 1
    let mut low = v.map(|r| if r == 14 { 1 } else { r });
    low.sort_unstable();
    is_consecutive(&low)
}

fn is_consecutive(sorted: &[u8]) -> bool {
    sorted.windows(2).all(|w| w[1] == w[0] + 1)
}
