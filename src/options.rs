//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use consolejack::GameOptions;
///
/// let options = GameOptions::default().with_decks(2);
/// assert_eq!(options.decks, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of standard decks shuffled together at the start of each round.
    pub decks: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { decks: 1 }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// A value of zero is raised to one so a round can always be dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use consolejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// assert_eq!(GameOptions::default().with_decks(0).decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = if decks == 0 { 1 } else { decks };
        self
    }
}
