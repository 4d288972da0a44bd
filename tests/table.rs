//! Console session tests.

use std::io::Cursor;

use consolejack::table::{announcement, capitalize};
use consolejack::{Card, Deck, Game, GameOptions, Outcome, PlayError, Rank, Suit, Table};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn stacked_game(draws: &[Card]) -> Game {
    let mut game = Game::new(GameOptions::default(), 1);
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    game.deck = Deck::from_cards(deck);
    game
}

fn play(game: Game, input: &str) -> (Result<usize, PlayError>, String) {
    let mut table = Table::new(game, Cursor::new(input.to_owned()), Vec::new());
    let result = table.run();
    let (_, _, output) = table.into_parts();
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn invalid_decision_reprompts_without_dealing() {
    let game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Ten),     // dealer
        card(Suit::Spades, Rank::Eight),  // player
        card(Suit::Diamonds, Rank::Nine), // dealer
    ]);

    let (result, output) = play(game, "ada\nx\n  S \nn\n");

    assert_eq!(result.unwrap(), 1);
    assert!(output.contains("Error: you must enter H or S"));
    assert_eq!(output.matches("What would you like to do?").count(), 2);
    assert!(!output.contains("Dealing card to Ada"));
    assert!(output.contains("Ada chose to stay."));
    assert!(output.contains("Ada stays at 18"));
    assert!(output.contains("Dealer stays at 19"));
    assert!(output.contains("Sorry, Ada loses!"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn flop_shows_player_hand_and_one_dealer_card() {
    let game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::King),    // dealer
        card(Suit::Spades, Rank::Eight),  // player
        card(Suit::Diamonds, Rank::Nine), // dealer
    ]);

    let (_, output) = play(game, "ada\ns\nn\n");

    let flop = "---- Ada's Hand ----\nThe 10 of Hearts\nThe 8 of Spades\n=> Total: 18\n\
                ---- Dealer's Hand ----\n=> First card is hidden\n=> Second card is The 9 of Diamonds\n";
    assert!(output.contains(flop), "{output}");
    assert!(output.contains("The K of Clubs\nThe 9 of Diamonds\n=> Total: 19"));
}

#[test]
fn opening_blackjack_is_announced_and_dealer_skipped() {
    let game = stacked_game(&[
        card(Suit::Hearts, Rank::Ace),   // player
        card(Suit::Clubs, Rank::Nine),   // dealer
        card(Suit::Spades, Rank::King),  // player
        card(Suit::Diamonds, Rank::Six), // dealer
    ]);

    let (result, output) = play(game, "bob\nn\n");

    assert_eq!(result.unwrap(), 1);
    assert!(output.contains("Congratulations, you hit blackjack! Bob wins!"));
    assert!(!output.contains("What would you like to do?"));
    assert!(!output.contains("Dealer's turn."));
}

#[test]
fn bust_after_hit_is_announced() {
    let game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),     // player
        card(Suit::Clubs, Rank::Nine),     // dealer
        card(Suit::Spades, Rank::Four),    // player
        card(Suit::Diamonds, Rank::Seven), // dealer
        card(Suit::Clubs, Rank::Ten),      // player hit
    ]);

    let (result, output) = play(game, "carol\nh\nn\n");

    assert_eq!(result.unwrap(), 1);
    assert!(output.contains("Dealing card to Carol: The 10 of Clubs"));
    assert!(output.contains("Carol's total is now: 24"));
    assert!(output.contains("Sorry, Carol busted. Carol loses"));
    assert!(!output.contains("Dealer's turn."));
}

#[test]
fn dealer_draws_and_reports_each_card() {
    let game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Ten),     // dealer
        card(Suit::Spades, Rank::Eight),  // player
        card(Suit::Diamonds, Rank::Five), // dealer
        card(Suit::Clubs, Rank::Four),    // dealer draw
    ]);

    let (_, output) = play(game, "dan\ns\nn\n");

    assert!(output.contains("Dan stays at 18\nDealer's turn.\n"));
    assert!(output.contains("Dealing card to Dealer: The 4 of Clubs"));
    assert!(output.contains("Dealer's total is now: 19"));
    assert!(output.contains("Dealer stays at 19"));
    assert!(output.contains("Sorry, Dan loses!"));
}

#[test]
fn replay_starts_a_fresh_round_with_a_new_name() {
    let game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),     // player
        card(Suit::Clubs, Rank::Ten),      // dealer
        card(Suit::Spades, Rank::Nine),    // player
        card(Suit::Diamonds, Rank::Seven), // dealer
    ]);

    // The second round is dealt from a shuffled deck; "s" either stays or,
    // after an opening blackjack, declines the next rematch.
    let (result, output) = play(game, "eve\ns\ny\nfAY\ns\nn\n");

    assert_eq!(result.unwrap(), 2);
    assert!(output.contains("Congratulations Eve wins!"));
    assert!(output.contains("Starting new game..."));
    assert_eq!(output.matches("What's your name?").count(), 2);
    assert!(output.contains("---- Fay's Hand ----"));
}

#[test]
fn closed_input_aborts_the_session() {
    let game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Ten),     // dealer
        card(Suit::Spades, Rank::Eight),  // player
        card(Suit::Diamonds, Rank::Nine), // dealer
    ]);

    let (result, _) = play(game, "ada\n");
    assert!(matches!(result, Err(PlayError::InputClosed)));
}

#[test]
fn names_are_capitalized() {
    assert_eq!(capitalize("ada"), "Ada");
    assert_eq!(capitalize("MCGREGOR"), "Mcgregor");
    assert_eq!(capitalize("  élodie"), "Élodie");
    assert_eq!(capitalize("   "), "Player");
}

#[test]
fn announcements_name_the_player() {
    assert_eq!(
        announcement(Outcome::DealerBlackjack, "Ada"),
        "Sorry, dealer hit blackjack. Ada loses"
    );
    assert_eq!(
        announcement(Outcome::DealerBusted, "Ada"),
        "Congratulations, dealer busted. Ada wins!"
    );
    assert_eq!(announcement(Outcome::Draw, "Ada"), "Draw Game");
}
