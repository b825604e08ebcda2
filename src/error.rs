// src/error.rs
// Error type shared by the draw, sampling and card modules.

use std::error::Error;
use std::fmt;

use crate::defs::Number;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BingoError {
    /// Every number of the universe has already been drawn.
    Exhausted,
    /// A number outside 1..=75 was offered to the drawn set.
    OutOfRange(Number),
    /// The sampling range is empty (min greater than max).
    InvalidRange { min: Number, max: Number },
    /// More distinct values were requested than the range holds.
    SampleTooLarge { count: usize, width: usize },
    /// A card layout broke the column rules.
    InvalidCard(String),
}

impl fmt::Display for BingoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BingoError::Exhausted => write!(f, "All numbers have been drawn"),
            BingoError::OutOfRange(number) => write!(f, "Number {number} is outside the game range"),
            BingoError::InvalidRange { min, max } => write!(f, "Invalid range [{min}, {max}]"),
            BingoError::SampleTooLarge { count, width } => {
                write!(f, "Cannot sample {count} distinct values from a range of {width}")
            }
            BingoError::InvalidCard(reason) => write!(f, "Invalid card: {reason}"),
        }
    }
}

impl Error for BingoError {}
