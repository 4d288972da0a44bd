//! The deck cards are dealt from.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered stack of cards.
///
/// The last card of the sequence is the top of the deck and is the next one
/// handed out by [`Deck::deal_one`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds `num_decks` standard decks and shuffles them together.
    ///
    /// # Example
    ///
    /// ```
    /// use consolejack::{DECK_SIZE, Deck};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::new(2, &mut rng);
    /// assert_eq!(deck.len(), 2 * DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Self {
        let mut deck = Self::ordered(num_decks);
        deck.shuffle(rng);
        log::debug!("built deck of {} cards from {num_decks} deck(s)", deck.len());
        log::trace!("{deck}");
        deck
    }

    /// Builds `num_decks` standard decks in construction order, unshuffled.
    #[must_use]
    pub fn ordered(num_decks: u8) -> Self {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Creates a deck from an explicit card order. The last card is on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Randomizes the order of the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` once the deck is empty.
    pub fn deal_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Here are the current cards in the deck")?;
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
