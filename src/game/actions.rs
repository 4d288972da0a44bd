use core::str::FromStr;

use crate::card::Card;
use crate::error::{ActionError, ParseDecisionError};
use crate::participant::Role;
use crate::result::Outcome;

use super::{Game, GameState};

/// A player's choice on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

impl FromStr for Decision {
    type Err = ParseDecisionError;

    /// Parses `h` or `s`, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use consolejack::Decision;
    ///
    /// assert_eq!(" H\n".parse::<Decision>(), Ok(Decision::Hit));
    /// assert_eq!("s".parse::<Decision>(), Ok(Decision::Stay));
    /// assert!("hit me".parse::<Decision>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("h") {
            Ok(Self::Hit)
        } else if input.eq_ignore_ascii_case("s") {
            Ok(Self::Stay)
        } else {
            Err(ParseDecisionError)
        }
    }
}

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 or going over ends the round at once; check
    /// [`Game::state`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);
        log::debug!("player drew {card:?}, total {}", self.player.total());

        self.settle_if_decided(Role::Player);

        Ok(card)
    }

    /// Player action: Stay (keep current hand).
    ///
    /// Hands the turn to the dealer, whose opening two cards are checked
    /// first. If they total 21 or more the round ends and the outcome is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&mut self) -> Result<Option<Outcome>, ActionError> {
        self.ensure_player_turn()?;

        self.player.stand();
        log::debug!("player stays at {}", self.player.total());

        self.state = GameState::DealerTurn;
        Ok(self.settle_if_decided(Role::Dealer))
    }
}
