//! Error types for game operations.
//!
//! Every error is a rejection: the game state is left untouched and the
//! caller may try another action.

use thiserror::Error;

/// Reasons a play can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game has already been won.
    #[error("the game is over")]
    GameOver,
    /// No cards were selected.
    #[error("no cards selected")]
    Empty,
    /// A card is not in the current player's hand.
    #[error("card is not in the current player's hand")]
    CardNotInHand,
    /// The same card was selected more than once.
    #[error("card selected more than once")]
    DuplicateCard,
    /// The opening play does not contain the Diamonds-3.
    #[error("the opening play must contain the 3 of diamonds")]
    MissingOpeningCard,
    /// Only singles, pairs and five-card hands can be played.
    #[error("only 1, 2 or 5 cards can be played")]
    InvalidLength,
    /// The play does not have as many cards as the last play.
    #[error("must play the same number of cards as the last play")]
    LengthMismatch,
    /// Two cards were played that do not share a rank.
    #[error("a pair must be two cards of the same rank")]
    NotAPair,
    /// Five cards were played that do not form a straight or flush.
    #[error("not a valid five-card combination")]
    InvalidFiveCardShape,
    /// The five cards on the table do not form a valid combination.
    #[error("the last play is not a valid five-card combination")]
    InvalidLastPlay,
    /// The play does not beat the last play.
    #[error("the play does not beat the last play")]
    NotHigher,
}

/// Reasons a pass can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PassError {
    /// The game has already been won.
    #[error("the game is over")]
    GameOver,
    /// The opening player has not played yet.
    #[error("the opening player cannot pass")]
    NotStarted,
    /// The round is fresh and its first player must play.
    #[error("the first player of a new round cannot pass")]
    FreshRound,
}

/// Errors that can occur while selecting cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The game has already been won.
    #[error("the game is over")]
    GameOver,
    /// The card is not in the current player's hand.
    #[error("card is not in the current player's hand")]
    CardNotInHand,
}

/// Errors that can occur when building a game from explicit hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A hand does not hold exactly 13 cards.
    #[error("every hand must hold exactly 13 cards")]
    WrongHandSize,
    /// A card appears in more than one place.
    #[error("a card was dealt more than once")]
    DuplicateCard,
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input is empty.
    #[error("empty card string")]
    Empty,
    /// The rank label is not recognised.
    #[error("invalid rank")]
    InvalidRank,
    /// The suit is not recognised.
    #[error("invalid suit")]
    InvalidSuit,
}
