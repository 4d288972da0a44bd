//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for the dealer to play.
    #[error("invalid game state for dealer play")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Input that is neither hit nor stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("you must enter H or S")]
pub struct ParseDecisionError;

/// Errors that end an interactive session.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum PlayError {
    /// The input stream ended while waiting for an answer.
    #[error("input closed while waiting for a response")]
    InputClosed,
    /// Reading from or writing to the console failed.
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
    /// Dealing the opening cards failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer could not finish their turn.
    #[error(transparent)]
    Dealer(#[from] DealerError),
}
