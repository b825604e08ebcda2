// src/game.rs
// This module provides the Game struct: the single owner of the called numbers
// and the card list, driving the draw, card and win functions on each action.

use std::collections::{BTreeSet, HashSet};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::DrawnSet;
use crate::card::{Card, CardColumns, CardGenerator};
use crate::defs::{Column, Number};
use crate::drawer::try_draw_with;
use crate::error::BingoError;
use crate::win::{is_winner, winning_cells, winning_columns};

/// A card that currently has at least one complete column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    pub index: usize,
    pub card_id: String,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardSnapshot {
    pub card_id: String,
    pub columns: CardColumns,
    pub winning_columns: Vec<Column>,
    pub winning_cells: BTreeSet<Number>,
}

/// Serializable view of a game at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub id: String,
    pub created_at: String,
    pub drawn: DrawnSet,
    pub remaining: usize,
    pub cards: Vec<CardSnapshot>,
}

pub struct Game {
    id: String,
    created_at: SystemTime,
    drawn: DrawnSet,
    cards: Vec<Card>,
    generator: CardGenerator,
    regenerations: usize,
    rng: StdRng,
}

fn new_game_id<R: Rng>(rng: &mut R) -> String {
    format!("game_{:08x}", rng.random::<u32>())
}

impl Game {
    /// Create a game seeded from the operating system
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a game whose draws and cards are reproducible from `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        Self {
            id: new_game_id(&mut rng),
            created_at: SystemTime::now(),
            drawn: DrawnSet::new(),
            cards: Vec::new(),
            generator: CardGenerator::new(),
            regenerations: 0,
            rng,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Get a human-readable creation time string
    pub fn created_at_string(&self) -> String {
        let datetime: DateTime<Utc> = self.created_at.into();
        datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }

    pub fn drawn(&self) -> &DrawnSet {
        &self.drawn
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Draw the next number and record it as called
    pub fn draw_number(&mut self) -> Result<Number, BingoError> {
        let number = try_draw_with(&self.drawn, &mut self.rng)?;
        self.drawn.insert(number)?;
        Ok(number)
    }

    pub fn add_card(&mut self) -> &Card {
        self.add_cards(1);
        // add_cards(1) always pushes exactly one card
        &self.cards[self.cards.len() - 1]
    }

    pub fn add_cards(&mut self, count: usize) -> &[Card] {
        let existing_ids: HashSet<u64> = self.cards.iter().map(Card::id).collect();
        let (new_cards, regenerations) = self.generator.generate_cards(count, &existing_ids, &mut self.rng);
        self.regenerations += regenerations;
        let start = self.cards.len();
        self.cards.extend(new_cards);
        &self.cards[start..]
    }

    /// Cards discarded so far because their id was already taken
    pub fn card_regenerations(&self) -> usize {
        self.regenerations
    }

    /// Winning cells of the card at `index`, recomputed from the current draw
    pub fn winning_cells(&self, index: usize) -> Option<BTreeSet<Number>> {
        self.cards.get(index).map(|card| winning_cells(card, &self.drawn))
    }

    pub fn winners(&self) -> Vec<Winner> {
        self.cards
            .iter()
            .enumerate()
            .filter_map(|(index, card)| {
                let columns = winning_columns(card, &self.drawn);
                if columns.is_empty() {
                    None
                } else {
                    Some(Winner { index, card_id: card.id_string(), columns })
                }
            })
            .collect()
    }

    pub fn has_winner(&self) -> bool {
        self.cards.iter().any(|card| is_winner(card, &self.drawn))
    }

    pub fn is_exhausted(&self) -> bool {
        self.drawn.is_full()
    }

    /// Start over with a fresh id, no called numbers and no cards
    pub fn reset(&mut self) {
        self.id = new_game_id(&mut self.rng);
        self.created_at = SystemTime::now();
        self.drawn = DrawnSet::new();
        self.cards.clear();
        self.regenerations = 0;
    }

    pub fn game_info(&self) -> String {
        format!(
            "Game[id={}, created={}, drawn={}, cards={}, winners={}]",
            self.id,
            self.created_at_string(),
            self.drawn.progress(),
            self.cards.len(),
            self.winners().len()
        )
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let cards = self
            .cards
            .iter()
            .map(|card| CardSnapshot {
                card_id: card.id_string(),
                columns: *card.columns(),
                winning_columns: winning_columns(card, &self.drawn),
                winning_cells: winning_cells(card, &self.drawn),
            })
            .collect();

        GameSnapshot {
            id: self.id.clone(),
            created_at: self.created_at_string(),
            drawn: self.drawn.clone(),
            remaining: self.drawn.remaining(),
            cards,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
