//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod deal;
mod select;
pub mod state;

pub use state::GameState;

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 4;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = 13;

/// A Big Two game engine that manages hands, turns and rounds.
///
/// The game owns the four hands, the cards on the table and whose turn it
/// is. Every action either applies completely or is rejected with an error
/// and leaves the game untouched.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Player hands, indexed by player.
    hands: [Hand; PLAYER_COUNT],
    /// Index of the player whose turn it is.
    current_player: usize,
    /// Cards on the table. Empty at the start of a round.
    last_play: Vec<Card>,
    /// Player who made the last play.
    last_player: Option<usize>,
    /// Cards the current player has selected.
    selection: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and deals the cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{Card, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let opener = game.current_player();
    /// assert!(game.hands()[opener].contains(Card::OPENING));
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut game = Self::undealt(options, seed);
        game.deal();
        game
    }

    /// Creates a game with empty hands.
    fn undealt(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: GameState::AwaitingOpeningPlay,
            hands: Default::default(),
            current_player: 0,
            last_play: Vec::new(),
            last_player: None,
            selection: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the opening play has been made.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.state.is_started()
    }

    /// Returns whether a player has won.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    /// Returns the winning player, if the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        match self.state {
            GameState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the cards on the table. Empty at the start of a round.
    #[must_use]
    pub fn last_play(&self) -> &[Card] {
        &self.last_play
    }

    /// Returns the player who made the last play in the current round.
    #[must_use]
    pub const fn last_player(&self) -> Option<usize> {
        self.last_player
    }

    /// Returns whether the current round has no play on the table yet.
    #[must_use]
    pub fn is_fresh_round(&self) -> bool {
        self.last_play.is_empty()
    }

    /// Returns all four hands.
    #[must_use]
    pub const fn hands(&self) -> &[Hand; PLAYER_COUNT] {
        &self.hands
    }

    /// Returns the hand of the given player.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Returns the hand of the player whose turn it is.
    #[must_use]
    pub fn current_hand(&self) -> &Hand {
        &self.hands[self.current_player]
    }

    /// Moves the turn to the next player and clears the selection.
    fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % PLAYER_COUNT;
        self.selection.clear();
    }
}
