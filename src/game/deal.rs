use rand::seq::SliceRandom;

use crate::card::{Card, full_deck};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::GameOptions;

use super::{Game, GameState, HAND_SIZE, PLAYER_COUNT};

impl Game {
    /// Shuffles a fresh deck and deals 13 cards to each player.
    ///
    /// Cards `0..13` of the shuffled deck go to player 0, `13..26` to player 1
    /// and so on. The holder of the Diamonds-3 becomes the current player and
    /// the table is cleared.
    pub fn deal(&mut self) {
        let mut deck = full_deck();
        deck.shuffle(&mut self.rng);

        for (hand, cards) in self.hands.iter_mut().zip(deck.chunks_exact(HAND_SIZE)) {
            *hand = Hand::from_cards(cards.iter().copied());
        }

        self.reset_table();
        log::info!("dealt new game, player {} opens", self.current_player);
    }

    /// Creates a game from explicit hands instead of a shuffled deck.
    ///
    /// Each hand must hold 13 cards and every card of the deck must appear
    /// exactly once. The seed drives later calls to [`Game::deal`].
    ///
    /// # Errors
    ///
    /// Returns an error if a hand does not hold 13 cards or a card is dealt
    /// more than once.
    pub fn with_hands(
        options: GameOptions,
        hands: [&[Card]; PLAYER_COUNT],
        seed: u64,
    ) -> Result<Self, DealError> {
        if hands.iter().any(|hand| hand.len() != HAND_SIZE) {
            return Err(DealError::WrongHandSize);
        }

        let mut seen = [false; 64];
        for &card in hands.iter().flat_map(|hand| hand.iter()) {
            let slot = &mut seen[usize::from(card.value())];
            if *slot {
                return Err(DealError::DuplicateCard);
            }
            *slot = true;
        }

        let mut game = Self::undealt(options, seed);
        for (hand, cards) in game.hands.iter_mut().zip(hands) {
            *hand = Hand::from_cards(cards.iter().copied());
        }
        game.reset_table();
        log::info!("dealt fixed hands, player {} opens", game.current_player);

        Ok(game)
    }

    /// Hands the turn to the holder of the Diamonds-3 and clears the table.
    fn reset_table(&mut self) {
        self.current_player = self
            .hands
            .iter()
            .position(|hand| hand.contains(Card::OPENING))
            .unwrap_or(0);
        self.last_play.clear();
        self.last_player = None;
        self.selection.clear();
        self.state = GameState::AwaitingOpeningPlay;
    }
}
