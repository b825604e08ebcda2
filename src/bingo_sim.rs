// src/bingo_sim.rs
// Non-interactive bingo run: generate cards and draw until a column is complete.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use bingo::config::{DEFAULT_CONFIG_PATH, GameConfig};
use bingo::defs::Column;
use bingo::game::Game;
use bingo::logging::{log_error_stderr, log_info, log_warning};

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(about = "Bingo Simulator - Draw numbers until a card completes a column")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Number of cards in play
    #[arg(long, default_value_t = 4)]
    cards: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Keep drawing until all numbers are called
    #[arg(long)]
    all: bool,

    /// Print the final game state as JSON
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    // JSON output must stay clean, so skip the config log line there
    let config = if args.json {
        GameConfig::from_file(&args.config).unwrap_or_default()
    } else {
        GameConfig::load_from_or_default(&args.config)
    };
    let seed = args.seed.or(config.seed);

    let mut game = match seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    game.add_cards(args.cards);
    if !args.json {
        log_info(&format!("Simulating {}", game.game_info()));
    }

    while !game.is_exhausted() && (args.all || !game.has_winner()) {
        game.draw_number()?;
    }

    if game.card_regenerations() > 0 && !args.json {
        log_warning(&format!("Regenerated {} cards due to duplicate IDs", game.card_regenerations()));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        return Ok(());
    }

    let winners = game.winners();
    if winners.is_empty() {
        log_warning("No card completed a column");
    }
    println!("Numbers drawn: {} ({:?})", game.drawn().progress(), game.drawn().numbers());
    for winner in winners {
        let letters: Vec<String> = winner.columns.iter().map(Column::to_string).collect();
        println!("BINGO! card #{} ({}) column {}", winner.index + 1, winner.card_id, letters.join(" "));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        log_error_stderr(&format!("Simulation failed: {e}"));
        std::process::exit(1);
    }
}
