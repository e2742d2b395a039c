use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{PlayError, SelectError};
use crate::result::PlayOutcome;

use super::Game;

impl Game {
    /// Toggles whether a card in the current player's hand is selected.
    ///
    /// Returns `true` if the card is now selected. The selection is cleared
    /// whenever a play or pass is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the card is not in the
    /// current player's hand.
    pub fn toggle_select(&mut self, card: Card) -> Result<bool, SelectError> {
        if self.is_game_over() {
            return Err(SelectError::GameOver);
        }

        if !self.current_hand().contains(card) {
            return Err(SelectError::CardNotInHand);
        }

        if let Some(index) = self.selection.iter().position(|&c| c == card) {
            self.selection.remove(index);
            Ok(false)
        } else {
            self.selection.push(card);
            Ok(true)
        }
    }

    /// Returns whether the card is selected.
    #[must_use]
    pub fn is_selected(&self, card: Card) -> bool {
        self.selection.contains(&card)
    }

    /// Returns the selected cards in the order they were selected.
    #[must_use]
    pub fn selected(&self) -> &[Card] {
        &self.selection
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Plays the selected cards, taken in hand order.
    ///
    /// The selection is kept if the play is rejected.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::play`].
    pub fn play_selected(&mut self) -> Result<PlayOutcome, PlayError> {
        let cards: Vec<Card> = self
            .current_hand()
            .cards()
            .iter()
            .copied()
            .filter(|card| self.selection.contains(card))
            .collect();
        self.play(&cards)
    }
}
