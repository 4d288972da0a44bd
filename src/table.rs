//! Interactive console driver.
//!
//! [`Table`] runs rounds of a [`Game`] over any line-based input and output,
//! so the same loop serves a terminal and scripted sessions.

use core::fmt;
use std::io::{BufRead, Write};

use crate::error::PlayError;
use crate::game::{DEFAULT_PLAYER_NAME, Decision, Game};
use crate::result::Outcome;

/// A console session: one game plus where answers come from and where
/// messages go.
#[derive(Debug)]
pub struct Table<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Table<R, W> {
    /// Seats a game at a console.
    pub const fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Splits the table back into its game, input and output.
    pub fn into_parts(self) -> (Game, R, W) {
        (self.game, self.input, self.output)
    }

    /// Plays rounds until the player declines a rematch.
    ///
    /// Returns the number of rounds played.
    ///
    /// # Errors
    ///
    /// Returns an error if the input ends, the console fails, or the deck
    /// runs out mid-round.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    ///
    /// use consolejack::{Game, GameOptions, Table};
    ///
    /// // Stay on the opening hand and leave after the first round.
    /// let input = Cursor::new("ada\ns\nn\n");
    /// let mut table = Table::new(Game::new(GameOptions::default(), 3), input, Vec::new());
    /// assert_eq!(table.run().unwrap(), 1);
    /// ```
    pub fn run(&mut self) -> Result<usize, PlayError> {
        let mut rounds = 0;
        loop {
            let outcome = self.play_round()?;
            rounds += 1;
            log::info!("round {rounds} finished: {outcome:?}");

            if !self.play_again()? {
                self.say("Goodbye!")?;
                return Ok(rounds);
            }

            self.say("Starting new game...")?;
            self.say("")?;
            self.game.new_round();
        }
    }

    /// Plays a single round from name capture to the final announcement.
    ///
    /// # Errors
    ///
    /// Returns an error if the input ends, the console fails, or the deck
    /// runs out mid-round.
    pub fn play_round(&mut self) -> Result<Outcome, PlayError> {
        self.ask_name()?;

        let opening = self.game.deal()?;
        self.show_flop()?;

        if let Some(outcome) = self.player_turn(opening)? {
            return self.conclude(outcome);
        }

        let outcome = self.dealer_turn()?;
        self.conclude(outcome)
    }

    fn ask_name(&mut self) -> Result<(), PlayError> {
        self.say("What's your name?")?;
        let name = capitalize(&self.read_line()?);
        self.game.set_player_name(name);
        Ok(())
    }

    fn show_flop(&mut self) -> Result<(), PlayError> {
        let player = self.game.player().flop_view().to_string();
        let dealer = self.game.dealer().flop_view().to_string();
        self.say(player)?;
        self.say(dealer)
    }

    /// Runs the hit/stay loop. Returns the outcome if the player's hand ended
    /// the round, or `None` once the turn has passed to the dealer.
    fn player_turn(&mut self, opening: Option<Outcome>) -> Result<Option<Outcome>, PlayError> {
        let name = self.game.player().name().to_owned();
        self.say(format_args!("{name}'s turn."))?;

        if opening.is_some() {
            return Ok(opening);
        }

        let dealer_opening = loop {
            self.say("\nWhat would you like to do? 1) [H]it 2) [S]tay")?;
            let response = self.read_line()?;

            let decision = match response.parse::<Decision>() {
                Ok(decision) => decision,
                Err(err) => {
                    log::debug!("rejected turn input {response:?}");
                    self.say(format_args!("Error: {err}"))?;
                    continue;
                }
            };

            if decision == Decision::Stay {
                self.say(format_args!("{name} chose to stay."))?;
                break self.game.stay()?;
            }

            let card = self.game.hit()?;
            let total = self.game.player().total();
            self.say(format_args!("Dealing card to {name}: {card}"))?;
            self.say(format_args!("{name}'s total is now: {total}"))?;

            if let Some(outcome) = self.game.outcome() {
                return Ok(Some(outcome));
            }
        };

        let total = self.game.player().total();
        self.say(format_args!("{name} stays at {total}"))?;
        self.say("Dealer's turn.")?;

        Ok(dealer_opening)
    }

    /// Lets the dealer draw to the hit minimum and returns the outcome.
    fn dealer_turn(&mut self) -> Result<Outcome, PlayError> {
        loop {
            if let Some(outcome) = self.game.outcome() {
                return Ok(outcome);
            }

            let drawn = self.game.dealer_hit()?;
            let total = self.game.dealer().total();
            match drawn {
                Some(card) => {
                    self.say(format_args!("Dealing card to Dealer: {card}"))?;
                    self.say(format_args!("Dealer's total is now: {total}"))?;
                }
                None => self.say(format_args!("Dealer stays at {total}"))?,
            }
        }
    }

    fn conclude(&mut self, outcome: Outcome) -> Result<Outcome, PlayError> {
        self.say("")?;
        let player = self.game.player().hand_view().to_string();
        let dealer = self.game.dealer().hand_view().to_string();
        self.say(player)?;
        self.say(dealer)?;
        let verdict = announcement(outcome, self.game.player().name());
        self.say(verdict)?;
        Ok(outcome)
    }

    fn play_again(&mut self) -> Result<bool, PlayError> {
        self.say("\nWould you like to play again? [Y]es, [N]o")?;
        let response = self.read_line()?;
        Ok(response.trim().eq_ignore_ascii_case("y"))
    }

    fn say(&mut self, message: impl fmt::Display) -> Result<(), PlayError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, PlayError> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayError::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}

/// Capitalizes a name: first letter upper case, the rest lower case.
///
/// Blank input becomes the default player name.
///
/// ```
/// use consolejack::table::capitalize;
///
/// assert_eq!(capitalize("  aDA \n"), "Ada");
/// assert_eq!(capitalize(""), "Player");
/// ```
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.trim().chars();
    let Some(first) = chars.next() else {
        return DEFAULT_PLAYER_NAME.to_owned();
    };
    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
}

/// Returns the line announcing how a round ended.
#[must_use]
pub fn announcement(outcome: Outcome, name: &str) -> String {
    match outcome {
        Outcome::PlayerBlackjack => format!("Congratulations, you hit blackjack! {name} wins!"),
        Outcome::DealerBlackjack => format!("Sorry, dealer hit blackjack. {name} loses"),
        Outcome::PlayerBusted => format!("Sorry, {name} busted. {name} loses"),
        Outcome::DealerBusted => format!("Congratulations, dealer busted. {name} wins!"),
        Outcome::PlayerWins => format!("Congratulations {name} wins!"),
        Outcome::DealerWins => format!("Sorry, {name} loses!"),
        Outcome::Draw => String::from("Draw Game"),
    }
}
