//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A player's hand, kept sorted ascending by [`Card::value`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand from the given cards, sorting them by value.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.sort_unstable_by_key(|card| card.value());
        Self { cards }
    }

    /// Returns the cards in the hand, lowest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds the given card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns whether the hand holds every given card.
    #[must_use]
    pub fn contains_all(&self, cards: &[Card]) -> bool {
        cards.iter().all(|&card| self.contains(card))
    }

    /// Removes the given cards.
    ///
    /// Nothing is removed unless every card is in the hand. Returns whether
    /// the cards were removed.
    pub fn remove_cards(&mut self, cards: &[Card]) -> bool {
        if !self.contains_all(cards) {
            return false;
        }
        self.cards.retain(|card| !cards.contains(card));
        true
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
