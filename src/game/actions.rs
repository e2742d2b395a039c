use crate::card::Card;
use crate::combo::{FiveCardKind, classify, compare_five};
use crate::error::{PassError, PlayError};
use crate::result::{PassOutcome, PlayOutcome};

use super::{Game, GameState};

fn max_value(cards: &[Card]) -> u8 {
    cards.iter().map(|card| card.value()).max().unwrap_or(0)
}

fn as_five(cards: &[Card]) -> Option<&[Card; 5]> {
    <&[Card; 5]>::try_from(cards).ok()
}

/// Checks that the cards form a single, a pair or a recognised five-card hand.
fn check_shape(cards: &[Card]) -> Result<(), PlayError> {
    match cards {
        [_] => Ok(()),
        [first, second] if first.rank == second.rank => Ok(()),
        [_, _] => Err(PlayError::NotAPair),
        _ => match as_five(cards) {
            Some(five) if classify(five) != FiveCardKind::None => Ok(()),
            Some(_) => Err(PlayError::InvalidFiveCardShape),
            None => Err(PlayError::InvalidLength),
        },
    }
}

impl Game {
    /// Checks whether the current player may play the given cards.
    ///
    /// This is the legality gate used by [`Game::play`]; it never changes the
    /// game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, no cards are given, a card is
    /// given twice or is not in the current player's hand, or the play breaks
    /// the opening, shape or ranking rules.
    pub fn check_play(&self, cards: &[Card]) -> Result<(), PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        if cards.is_empty() {
            return Err(PlayError::Empty);
        }

        if cards
            .iter()
            .enumerate()
            .any(|(i, card)| cards[..i].contains(card))
        {
            return Err(PlayError::DuplicateCard);
        }

        if !self.current_hand().contains_all(cards) {
            return Err(PlayError::CardNotInHand);
        }

        // Opening play
        if !self.is_started() {
            if !cards.contains(&Card::OPENING) {
                return Err(PlayError::MissingOpeningCard);
            }
            if self.options.validate_opening_shape {
                check_shape(cards)?;
            }
            return Ok(());
        }

        // Fresh round: nothing to beat
        if self.last_play.is_empty() {
            if self.options.validate_fresh_round_shape {
                check_shape(cards)?;
            }
            return Ok(());
        }

        if cards.len() != self.last_play.len() {
            return Err(PlayError::LengthMismatch);
        }

        match cards {
            [_] => {}
            [first, second] => {
                if first.rank != second.rank {
                    return Err(PlayError::NotAPair);
                }
            }
            _ => {
                let (Some(current), Some(last)) = (as_five(cards), as_five(&self.last_play))
                else {
                    return Err(PlayError::InvalidLength);
                };

                if classify(current) == FiveCardKind::None {
                    return Err(PlayError::InvalidFiveCardShape);
                }
                if classify(last) == FiveCardKind::None {
                    return Err(PlayError::InvalidLastPlay);
                }

                return if compare_five(current, last) {
                    Ok(())
                } else {
                    Err(PlayError::NotHigher)
                };
            }
        }

        if max_value(cards) > max_value(&self.last_play) {
            Ok(())
        } else {
            Err(PlayError::NotHigher)
        }
    }

    /// Plays the given cards from the current player's hand.
    ///
    /// On success the cards become the last play. If the player's hand is
    /// now empty the game is over and the player is reported as the winner;
    /// otherwise the turn passes to the next player.
    ///
    /// # Errors
    ///
    /// Returns an error if [`Game::check_play`] rejects the cards. The game is
    /// unchanged in that case.
    pub fn play(&mut self, cards: &[Card]) -> Result<PlayOutcome, PlayError> {
        let player = self.current_player;
        self.check_play(cards)
            .inspect_err(|e| log::debug!("player {player} play rejected: {e}"))?;

        self.hands[player].remove_cards(cards);
        self.last_play = cards.to_vec();
        self.last_player = Some(player);
        log::trace!("player {player} played {} card(s)", cards.len());

        if self.hands[player].is_empty() {
            self.state = GameState::GameOver { winner: player };
            self.selection.clear();
            log::info!("player {player} wins");
            return Ok(PlayOutcome {
                player,
                cards: cards.to_vec(),
                winner: Some(player),
            });
        }

        self.state = GameState::InRound;
        self.advance_turn();

        Ok(PlayOutcome {
            player,
            cards: cards.to_vec(),
            winner: None,
        })
    }

    /// Passes the turn to the next player.
    ///
    /// When the turn returns to the player who made the last play, the table
    /// is cleared and that player starts a new round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the opening play has not been
    /// made, or the current round has no play to pass on.
    pub fn pass(&mut self) -> Result<PassOutcome, PassError> {
        let player = self.current_player;
        let rejection = if self.is_game_over() {
            Some(PassError::GameOver)
        } else if !self.is_started() {
            Some(PassError::NotStarted)
        } else if self.last_play.is_empty() {
            Some(PassError::FreshRound)
        } else {
            None
        };
        if let Some(e) = rejection {
            log::debug!("player {player} pass rejected: {e}");
            return Err(e);
        }

        self.advance_turn();

        let round_reset = self.last_player == Some(self.current_player);
        if round_reset {
            self.last_play.clear();
            self.last_player = None;
            log::info!("new round, player {} leads", self.current_player);
        }

        Ok(PassOutcome {
            player,
            next_player: self.current_player,
            round_reset,
        })
    }
}
