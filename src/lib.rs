//! A Big Two card game rule engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals four hands, enforces the
//! opening rule, validates singles, pairs and five-card combinations, and
//! tracks turns and rounds until a player empties their hand.
//!
//! # Example
//!
//! ```
//! use bigtwo::{Card, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let outcome = game.play(&[Card::OPENING]).unwrap();
//! assert_eq!(game.last_play(), &[Card::OPENING]);
//! assert_eq!(outcome.winner, None);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combo;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, full_deck};
pub use combo::{FiveCardKind, classify, compare_five, is_flush, is_straight};
pub use error::{DealError, ParseCardError, PassError, PlayError, SelectError};
pub use game::{Game, GameState, HAND_SIZE, PLAYER_COUNT};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{PassOutcome, PlayOutcome};
