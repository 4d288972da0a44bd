//! Hand valuation and turn status.

use crate::card::Card;

/// The total that wins outright; anything above it is a bust.
pub const BLACKJACK_AMOUNT: u8 = 21;

/// The dealer keeps drawing while their total is below this value.
pub const DEALER_HIT_MIN: u8 = 17;

/// Calculates the best total of a hand.
///
/// Every ace starts at 11. One ace at a time is then demoted to 1 while the
/// total is over [`BLACKJACK_AMOUNT`].
///
/// # Example
///
/// ```
/// use consolejack::{Card, Rank, Suit, hand::total};
///
/// let aces = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Spades, Rank::Ace),
/// ];
/// assert_eq!(total(&aces), 12);
/// assert_eq!(total(&[]), 0);
/// ```
#[must_use]
pub fn total(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.rank.value());
    }

    for _ in 0..aces {
        if value <= BLACKJACK_AMOUNT {
            break;
        }
        value -= 10;
    }

    value
}

/// Turn status of a participant within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Still taking cards.
    Active,
    /// Stopped drawing below 21.
    Stayed,
    /// Total went over 21.
    Busted,
    /// Total is exactly 21.
    Blackjack,
}

impl HandStatus {
    /// Derives the status implied by a total alone.
    #[must_use]
    pub const fn from_total(total: u8) -> Self {
        if total > BLACKJACK_AMOUNT {
            Self::Busted
        } else if total == BLACKJACK_AMOUNT {
            Self::Blackjack
        } else {
            Self::Active
        }
    }

    /// Returns whether the participant's turn is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}
