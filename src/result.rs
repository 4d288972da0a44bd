//! Round outcomes and how they are decided.

use crate::participant::{Participant, Role};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player reached 21.
    PlayerBlackjack,
    /// The dealer reached 21.
    DealerBlackjack,
    /// The player went over 21.
    PlayerBusted,
    /// The dealer went over 21.
    DealerBusted,
    /// Both stood and the player's total was higher.
    PlayerWins,
    /// Both stood and the dealer's total was higher.
    DealerWins,
    /// Both stood on the same total.
    Draw,
}

impl Outcome {
    /// Returns the winning side, or `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Role> {
        match self {
            Self::PlayerBlackjack | Self::DealerBusted | Self::PlayerWins => Some(Role::Player),
            Self::DealerBlackjack | Self::PlayerBusted | Self::DealerWins => Some(Role::Dealer),
            Self::Draw => None,
        }
    }

    /// Returns whether the player won.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self.winner(), Some(Role::Player))
    }

    /// Returns whether the round was cut short by a blackjack or a bust.
    #[must_use]
    pub const fn is_early(self) -> bool {
        !matches!(self, Self::PlayerWins | Self::DealerWins | Self::Draw)
    }
}

/// Checks a participant for 21 or a bust.
///
/// Returns `None` while the round should go on.
///
/// # Example
///
/// ```
/// use consolejack::{Card, Outcome, Participant, Rank, Suit, result::blackjack_or_bust};
///
/// let mut player = Participant::player("Ada");
/// player.add_card(Card::new(Suit::Hearts, Rank::Ace));
/// player.add_card(Card::new(Suit::Clubs, Rank::King));
/// assert_eq!(blackjack_or_bust(&player), Some(Outcome::PlayerBlackjack));
/// ```
#[must_use]
pub fn blackjack_or_bust(participant: &Participant) -> Option<Outcome> {
    let outcome = match (participant.role(), participant.is_blackjack(), participant.is_busted()) {
        (Role::Player, true, _) => Outcome::PlayerBlackjack,
        (Role::Dealer, true, _) => Outcome::DealerBlackjack,
        (Role::Player, _, true) => Outcome::PlayerBusted,
        (Role::Dealer, _, true) => Outcome::DealerBusted,
        _ => return None,
    };
    Some(outcome)
}

/// Compares final totals once both sides have stood.
#[must_use]
pub fn who_won(player: &Participant, dealer: &Participant) -> Outcome {
    match player.total().cmp(&dealer.total()) {
        core::cmp::Ordering::Greater => Outcome::PlayerWins,
        core::cmp::Ordering::Less => Outcome::DealerWins,
        core::cmp::Ordering::Equal => Outcome::Draw,
    }
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
}
