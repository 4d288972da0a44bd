//! Game state types.

use crate::result::Outcome;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Hands are empty and the next round is ready to be dealt.
    WaitingForDeal,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer draws until reaching the hit minimum.
    DealerTurn,
    /// The round has been decided.
    RoundOver(Outcome),
}
