//! Play blackjack against the dealer in the terminal.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use consolejack::{Game, GameOptions, Table};

/// Single-player blackjack against a house dealer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of decks shuffled together each round.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..))]
    decks: u8,
    /// Seed for shuffling; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("starting with {} deck(s), seed {seed}", args.decks);

    let options = GameOptions::default().with_decks(args.decks);
    let game = Game::new(options, seed);
    let mut table = Table::new(game, io::stdin().lock(), io::stdout().lock());

    match table.run() {
        Ok(rounds) => {
            log::info!("session ended after {rounds} round(s)");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("session aborted: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
