//! Game engine and state management.

use alloc::string::String;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::options::GameOptions;
use crate::participant::{Participant, Role};
use crate::result::{Outcome, RoundResult, blackjack_or_bust};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use actions::Decision;
pub use state::GameState;

/// Name the player has until they introduce themselves.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// A single-player blackjack round engine.
///
/// The game owns the deck, the player and the dealer, and walks them through
/// deal, player turn, dealer turn and resolution. It does no I/O; see
/// [`crate::table::Table`] for the console driver.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to deal this round.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    state: GameState,
    player: Participant,
    dealer: Participant,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use consolejack::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForDeal);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(options.decks, &mut rng);

        Self {
            deck,
            options,
            state: GameState::WaitingForDeal,
            player: Participant::player(DEFAULT_PLAYER_NAME),
            dealer: Participant::dealer(),
            rng,
        }
    }

    /// Prepares the next round: a freshly shuffled deck and empty hands.
    ///
    /// The previous deck is discarded rather than reshuffled.
    pub fn new_round(&mut self) {
        self.deck = Deck::new(self.options.decks, &mut self.rng);
        self.player.clear_hand();
        self.dealer.clear_hand();
        self.state = GameState::WaitingForDeal;
        log::debug!("new round ready with {} cards", self.deck.len());
    }

    /// Sets the player's display name.
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player.set_name(name);
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the outcome once the round is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::RoundOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns the round summary once the round is over.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.outcome().map(|outcome| RoundResult {
            outcome,
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
        })
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.deal_one()
    }

    const fn participant_mut(&mut self, role: Role) -> &mut Participant {
        match role {
            Role::Player => &mut self.player,
            Role::Dealer => &mut self.dealer,
        }
    }

    /// Ends the round if the given side has reached 21 or busted.
    fn settle_if_decided(&mut self, role: Role) -> Option<Outcome> {
        let participant = match role {
            Role::Player => &self.player,
            Role::Dealer => &self.dealer,
        };
        let outcome = blackjack_or_bust(participant)?;
        self.finish(outcome);
        Some(outcome)
    }

    fn finish(&mut self, outcome: Outcome) {
        log::debug!(
            "round over: {outcome:?} (player {}, dealer {})",
            self.player.total(),
            self.dealer.total()
        );
        self.state = GameState::RoundOver(outcome);
    }
}
