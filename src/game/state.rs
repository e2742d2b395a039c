//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the holder of the Diamonds-3 to open.
    AwaitingOpeningPlay,
    /// Players are taking turns to beat or pass the last play.
    InRound,
    /// A player has emptied their hand.
    GameOver {
        /// Index of the winning player.
        winner: usize,
    },
}

impl GameState {
    /// Returns whether the opening play has been made.
    #[must_use]
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::AwaitingOpeningPlay)
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}
