//! Five-card combination classification and comparison.
//!
//! Only straights, flushes and straight flushes are recognised. Any other
//! five-card set classifies as [`FiveCardKind::None`] and cannot be played.

use crate::card::Card;

/// Classification of a five-card play, ordered weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FiveCardKind {
    /// Not a playable combination.
    None = 0,
    /// Five consecutive ranks.
    Straight = 1,
    /// Five cards of one suit.
    Flush = 2,
    /// Five consecutive ranks of one suit.
    StraightFlush = 3,
}

/// Returns whether the cards form a run of consecutive strengths.
///
/// The 2 ranks above the Ace, so runs never wrap: `3 4 5 A 2` is not a
/// straight.
#[must_use]
pub fn is_straight(cards: &[Card; 5]) -> bool {
    let mut strengths = cards.map(|card| card.rank.strength());
    strengths.sort_unstable();
    strengths.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Returns whether all cards share one suit.
#[must_use]
pub fn is_flush(cards: &[Card; 5]) -> bool {
    cards.iter().all(|card| card.suit == cards[0].suit)
}

/// Classifies five cards.
///
/// ```
/// use bigtwo::{Card, FiveCardKind, classify};
///
/// let cards = ["3D", "4C", "5H", "6S", "7D"].map(|s| s.parse::<Card>().unwrap());
/// assert_eq!(classify(&cards), FiveCardKind::Straight);
/// ```
#[must_use]
pub fn classify(cards: &[Card; 5]) -> FiveCardKind {
    match (is_straight(cards), is_flush(cards)) {
        (true, true) => FiveCardKind::StraightFlush,
        (false, true) => FiveCardKind::Flush,
        (true, false) => FiveCardKind::Straight,
        (false, false) => FiveCardKind::None,
    }
}

fn highest(cards: &[Card; 5]) -> Card {
    cards.iter().copied().fold(cards[0], Card::max)
}

/// Returns whether `current` outranks `last`.
///
/// A higher classification always wins. Flushes (and straight flushes) of
/// the same suit compare their highest rank, otherwise the suit decides.
/// Straights compare their highest card by rank, then by that card's suit.
#[must_use]
pub fn compare_five(current: &[Card; 5], last: &[Card; 5]) -> bool {
    let current_kind = classify(current);
    let last_kind = classify(last);

    if current_kind != last_kind {
        return current_kind > last_kind;
    }

    match current_kind {
        FiveCardKind::Flush | FiveCardKind::StraightFlush => {
            if current[0].suit == last[0].suit {
                highest(current).rank > highest(last).rank
            } else {
                current[0].suit > last[0].suit
            }
        }
        FiveCardKind::Straight => {
            let current_high = highest(current);
            let last_high = highest(last);
            if current_high.rank == last_high.rank {
                current_high.suit > last_high.suit
            } else {
                current_high.rank > last_high.rank
            }
        }
        FiveCardKind::None => false,
    }
}
