use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DealerError;
use crate::hand::DEALER_HIT_MIN;
use crate::participant::Role;
use crate::result::who_won;

use super::{Game, GameState};

impl Game {
    /// Plays one step of the dealer's turn.
    ///
    /// Below [`DEALER_HIT_MIN`] the dealer draws a card and it is returned;
    /// 21 or a bust ends the round right there. At or above the minimum the
    /// dealer stands, the totals are compared and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_hit(&mut self) -> Result<Option<Card>, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        if self.dealer.total() >= DEALER_HIT_MIN {
            self.dealer.stand();
            let outcome = who_won(&self.player, &self.dealer);
            self.finish(outcome);
            return Ok(None);
        }

        let card = self.draw().ok_or(DealerError::NoCards)?;
        self.dealer.add_card(card);
        log::debug!("dealer drew {card:?}, total {}", self.dealer.total());

        self.settle_if_decided(Role::Dealer);

        Ok(Some(card))
    }

    /// Plays out the dealer's whole turn.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.state == GameState::DealerTurn {
            if let Some(card) = self.dealer_hit()? {
                drawn_cards.push(card);
            }
        }

        Ok(drawn_cards)
    }
}
