use crate::error::DealError;
use crate::participant::Role;
use crate::result::Outcome;

use super::{Game, GameState};

/// Order the opening cards go out in.
const DEAL_ORDER: [Role; 4] = [Role::Player, Role::Dealer, Role::Player, Role::Dealer];

impl Game {
    /// Deals two cards each, alternating player and dealer.
    ///
    /// The player's hand is checked straight away: opening on 21 or over ends
    /// the round and its outcome is returned. Otherwise the player's turn
    /// begins and `None` is returned. The dealer's opening hand is only
    /// checked when their turn starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or the deck
    /// holds fewer than four cards.
    pub fn deal(&mut self) -> Result<Option<Outcome>, DealError> {
        if self.state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }

        if self.cards_remaining() < DEAL_ORDER.len() {
            return Err(DealError::NotEnoughCards);
        }

        for role in DEAL_ORDER {
            let card = self.draw().ok_or(DealError::NotEnoughCards)?;
            self.participant_mut(role).add_card(card);
        }

        log::debug!(
            "dealt opening hands: player {}, dealer {}",
            self.player.total(),
            self.dealer.total()
        );

        self.state = GameState::PlayerTurn;
        Ok(self.settle_if_decided(Role::Player))
    }
}
