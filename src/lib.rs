//! A single-player console blackjack game with an embeddable rule engine.
//!
//! The [`Game`] type deals from a seeded [`Deck`], runs the player's and the
//! dealer's turns and decides the round. With the `std` feature, [`Table`]
//! drives a game over a line-based console.
//!
//! # Example
//!
//! ```
//! use consolejack::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! if game.deal().unwrap().is_none() && game.stay().unwrap().is_none() {
//!     game.dealer_play().unwrap();
//! }
//! assert!(matches!(game.state(), GameState::RoundOver(_)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::PlayError;
pub use error::{ActionError, DealError, DealerError, ParseDecisionError};
pub use game::{Decision, Game, GameState};
pub use hand::{BLACKJACK_AMOUNT, DEALER_HIT_MIN, HandStatus};
pub use options::GameOptions;
pub use participant::{Participant, Role};
pub use result::{Outcome, RoundResult};
#[cfg(feature = "std")]
pub use table::Table;
