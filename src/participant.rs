//! Player and dealer representations.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::hand::{BLACKJACK_AMOUNT, HandStatus, total};

/// Name the dealer is always shown under.
pub const DEALER_NAME: &str = "Dealer";

/// Which side of the table a participant plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player. Their hand is always fully visible.
    Player,
    /// The house. One card stays hidden until the dealer's turn.
    Dealer,
}

/// Someone holding cards: the player or the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    role: Role,
    cards: Vec<Card>,
    status: HandStatus,
}

impl Participant {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Player,
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Creates the dealer with an empty hand.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            name: String::from(DEALER_NAME),
            role: Role::Dealer,
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the participant.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Adds a card to the hand and updates the status.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.status = HandStatus::from_total(self.total());
    }

    /// Ends the turn without busting.
    ///
    /// Has no effect once the hand has already busted or reached 21.
    pub fn stand(&mut self) {
        if self.status == HandStatus::Active {
            self.status = HandStatus::Stayed;
        }
    }

    /// Empties the hand for a new round.
    pub fn clear_hand(&mut self) {
        self.cards.clear();
        self.status = HandStatus::Active;
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the most recently dealt card.
    #[must_use]
    pub fn last_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the current turn status.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Calculates the best total of the hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        total(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > BLACKJACK_AMOUNT
    }

    /// Returns whether the hand totals exactly 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.total() == BLACKJACK_AMOUNT
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a view of the whole hand with its total.
    #[must_use]
    pub const fn hand_view(&self) -> HandView<'_> {
        HandView(self)
    }

    /// Returns the view shown right after the deal.
    ///
    /// The player's flop is the whole hand. The dealer's flop hides the first
    /// card and shows only the last one dealt.
    #[must_use]
    pub const fn flop_view(&self) -> FlopView<'_> {
        FlopView(self)
    }
}

/// Full display of a hand: a header, one line per card, and the total.
#[derive(Debug, Clone, Copy)]
pub struct HandView<'a>(&'a Participant);

impl fmt::Display for HandView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {}'s Hand ----", self.0.name)?;
        for card in &self.0.cards {
            writeln!(f, "{card}")?;
        }
        write!(f, "=> Total: {}", self.0.total())
    }
}

/// Display of a hand right after the deal, concealing the dealer's first card.
#[derive(Debug, Clone, Copy)]
pub struct FlopView<'a>(&'a Participant);

impl fmt::Display for FlopView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.role {
            Role::Player => fmt::Display::fmt(&self.0.hand_view(), f),
            Role::Dealer => {
                writeln!(f, "---- {}'s Hand ----", self.0.name)?;
                writeln!(f, "=> First card is hidden")?;
                match self.0.last_card() {
                    Some(card) => write!(f, "=> Second card is {card}"),
                    None => write!(f, "=> No cards dealt"),
                }
            }
        }
    }
}
