// lib.rs
// Library modules for the bingo game

pub mod defs;
pub mod error;
pub mod logging;
pub mod config;
pub mod sampler;
pub mod board;
pub mod drawer;
pub mod card;
pub mod win;
pub mod game;
pub mod terminal;

pub use board::DrawnSet;
pub use card::{Card, generate_card};
pub use drawer::{draw, try_draw};
pub use error::BingoError;
pub use sampler::sample_unique;
pub use win::winning_cells;
