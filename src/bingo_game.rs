// src/bingo_game.rs
// Interactive terminal bingo: draw numbers, add cards and watch columns fill up.
//
// Interactive Controls:
// - ENTER/SPACE/N: Draw the next number
// - C: Add a new card
// - R: Start a new game
// - ESC/Q: Exit
//
// CLI Options override the values loaded from the configuration file.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use bingo::config::{DEFAULT_CONFIG_PATH, GameConfig};
use bingo::error::BingoError;
use bingo::game::Game;
use bingo::logging::{log_error_stderr, log_info};
use bingo::terminal::{self, KeyAction};

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(about = "Bingo Game - Draw numbers and track winning cards in the terminal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Number of cards to generate at start
    #[arg(long)]
    cards: Option<usize>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

fn new_game(config: &GameConfig) -> Game {
    let mut game = match config.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    game.add_cards(config.initial_cards);
    game
}

fn run(config: GameConfig) -> Result<(), Box<dyn Error>> {
    let mut game = new_game(&config);
    log_info(&format!("Created new game instance: {}", game.game_info()));

    let mut message: Option<String> = None;

    loop {
        terminal::show_on_terminal(&game, &config, message.as_deref());

        message = match terminal::wait_for_user_action()? {
            KeyAction::Draw => match game.draw_number() {
                Ok(number) => Some(format!("Drawn number: {number}")),
                Err(BingoError::Exhausted) => Some("All 75 numbers have been drawn. Press R for a new game.".to_string()),
                Err(e) => Some(format!("Error drawing number: {e}")),
            },
            KeyAction::AddCard => {
                let card_id = game.add_card().id_string();
                Some(format!("Added card {card_id}"))
            }
            KeyAction::Reset => {
                // Keep the game's RNG running so a seeded game does not repeat itself
                game.reset();
                game.add_cards(config.initial_cards);
                Some(format!("Started game {}", game.id()))
            }
            KeyAction::Quit => break,
        };
    }

    log_info(&format!("Game ended: {}", game.game_info()));
    Ok(())
}

fn main() {
    let args = Args::parse();

    let mut config = GameConfig::load_from_or_default(&args.config);
    if let Some(cards) = args.cards {
        config.initial_cards = cards;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    if let Err(e) = run(config) {
        log_error_stderr(&format!("Bingo game failed: {e}"));
        std::process::exit(1);
    }
}
