// src/defs.rs
// Shared constants and the B/I/N/G/O column ranges of a 75-ball game.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub type Number = u8;

pub const FIRSTNUMBER: Number = 1;
pub const LASTNUMBER: Number = 75;
pub const UNIVERSE_SIZE: usize = (LASTNUMBER - FIRSTNUMBER + 1) as usize;

pub const COLUMNS_PER_CARD: usize = 5;
pub const NUMBERS_PER_COLUMN: usize = 5;
pub const NUMBERS_PER_CARD: usize = COLUMNS_PER_CARD * NUMBERS_PER_COLUMN;

// Width of every column range
const RANGE_WIDTH: Number = (UNIVERSE_SIZE / COLUMNS_PER_CARD) as Number;

// A card column must fit in its range or column sampling never finishes
const _: () = assert!(NUMBERS_PER_COLUMN <= RANGE_WIDTH as usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    B,
    I,
    N,
    G,
    O,
}

impl Column {
    pub const ALL: [Column; COLUMNS_PER_CARD] = [Column::B, Column::I, Column::N, Column::G, Column::O];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }

    pub fn letter(self) -> char {
        match self {
            Column::B => 'B',
            Column::I => 'I',
            Column::N => 'N',
            Column::G => 'G',
            Column::O => 'O',
        }
    }

    /// Inclusive range of numbers a card column of this letter draws from.
    pub fn range(self) -> RangeInclusive<Number> {
        let start = FIRSTNUMBER + self.index() as Number * RANGE_WIDTH;
        start..=start + RANGE_WIDTH - 1
    }

    /// Column whose range holds `number`, or `None` outside the universe.
    pub fn for_number(number: Number) -> Option<Column> {
        if !is_in_universe(number) {
            return None;
        }
        Self::from_index(((number - FIRSTNUMBER) / RANGE_WIDTH) as usize)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

pub fn is_in_universe(number: Number) -> bool {
    (FIRSTNUMBER..=LASTNUMBER).contains(&number)
}
