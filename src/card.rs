// src/card.rs
// Bingo cards: layout, validation, content ids and random generation.

use crate::defs::{COLUMNS_PER_CARD, Column, NUMBERS_PER_COLUMN, Number};
use crate::error::BingoError;
use crate::sampler::sample_column;

use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub type CardColumns = [[Number; NUMBERS_PER_COLUMN]; COLUMNS_PER_CARD];

/// A 5x5 bingo card stored column by column (B, I, N, G, O).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    columns: CardColumns,
}

impl Card {
    /// Checks that every column holds distinct numbers from its own range.
    pub fn from_columns(columns: CardColumns) -> Result<Self, BingoError> {
        for (column, values) in Column::ALL.iter().zip(columns.iter()) {
            let range = column.range();
            if let Some(stray) = values.iter().find(|n| !range.contains(n)) {
                return Err(BingoError::InvalidCard(format!(
                    "{stray} does not belong to column {column}"
                )));
            }
            let distinct: HashSet<_> = values.iter().collect();
            if distinct.len() != values.len() {
                return Err(BingoError::InvalidCard(format!("column {column} repeats a number")));
            }
        }
        Ok(Card { columns })
    }

    pub fn columns(&self) -> &CardColumns {
        &self.columns
    }

    pub fn column(&self, column: Column) -> &[Number; NUMBERS_PER_COLUMN] {
        &self.columns[column.index()]
    }

    /// Row `row` across the five columns, for rendering.
    pub fn row(&self, row: usize) -> Option<[Number; COLUMNS_PER_CARD]> {
        if row >= NUMBERS_PER_COLUMN {
            return None;
        }
        let mut values = [0; COLUMNS_PER_CARD];
        for (value, column) in values.iter_mut().zip(self.columns.iter()) {
            *value = column[row];
        }
        Some(values)
    }

    pub fn numbers(&self) -> impl Iterator<Item = Number> + '_ {
        self.columns.iter().flat_map(|column| column.iter().copied())
    }

    pub fn contains(&self, number: Number) -> bool {
        Column::for_number(number).is_some_and(|column| self.column(column).contains(&number))
    }

    /// Content hash identifying the card.
    pub fn id(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for column in &self.columns {
            for &number in column {
                hasher.write_u8(number);
            }
        }
        hasher.finish()
    }

    pub fn id_string(&self) -> String {
        format!("{:016X}", self.id())
    }
}

/// Generates one card from the thread RNG.
pub fn generate_card() -> Card {
    generate_card_with(&mut rand::rng())
}

pub fn generate_card_with<R: Rng>(rng: &mut R) -> Card {
    Card { columns: Column::ALL.map(|column| sample_column(column, &mut *rng)) }
}

#[derive(Debug, Clone, Default)]
pub struct CardGenerator;

impl CardGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates `requested_cards` cards whose ids differ from each other and
    /// from `existing_ids`. Colliding cards are regenerated; the second value
    /// is how many were thrown away.
    pub fn generate_cards<R: Rng>(
        &self,
        requested_cards: usize,
        existing_ids: &HashSet<u64>,
        rng: &mut R,
    ) -> (Vec<Card>, usize) {
        let mut cards = Vec::with_capacity(requested_cards);
        let mut seen_ids = existing_ids.clone();
        let mut total_regenerations = 0;

        while cards.len() < requested_cards {
            let card = generate_card_with(rng);
            if !seen_ids.insert(card.id()) {
                total_regenerations += 1;
                continue;
            }
            cards.push(card);
        }

        (cards, total_regenerations)
    }
}
