//! Outcome types for accepted actions.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Result of an accepted play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The player who made the play.
    pub player: usize,
    /// The cards played, now on the table.
    pub cards: Vec<Card>,
    /// The winner, if the play emptied the player's hand.
    pub winner: Option<usize>,
}

/// Result of an accepted pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// The player who passed.
    pub player: usize,
    /// The player whose turn it is now.
    pub next_player: usize,
    /// Whether the turn returned to the last player and the table was cleared.
    pub round_reset: bool,
}
