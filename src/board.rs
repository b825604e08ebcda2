// bingo/src/board.rs
// This module holds the set of called numbers and the board views built on it.

use serde::{Serialize, Serializer};

use crate::defs::{COLUMNS_PER_CARD, Column, LASTNUMBER, Number, UNIVERSE_SIZE, is_in_universe};
use crate::error::BingoError;

/// Numbers called so far, in the order they were drawn.
///
/// Membership is kept in a bitmask next to the ordered list, so lookups stay
/// constant time while the board can still be shown in call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawnSet {
    order: Vec<Number>,
    mask: u128,
}

impl DrawnSet {
    pub fn new() -> Self {
        DrawnSet { order: Vec::with_capacity(UNIVERSE_SIZE), mask: 0 }
    }

    /// Builds a set from `numbers`, ignoring repeats.
    pub fn from_numbers<I: IntoIterator<Item = Number>>(numbers: I) -> Result<Self, BingoError> {
        let mut drawn = DrawnSet::new();
        for number in numbers {
            drawn.insert(number)?;
        }
        Ok(drawn)
    }

    fn bit(number: Number) -> u128 {
        1u128 << number
    }

    /// Adds `number`; returns `false` when it was already present.
    pub fn insert(&mut self, number: Number) -> Result<bool, BingoError> {
        if !is_in_universe(number) {
            return Err(BingoError::OutOfRange(number));
        }
        if self.contains(number) {
            return Ok(false);
        }
        self.mask |= Self::bit(number);
        self.order.push(number);
        Ok(true)
    }

    pub fn contains(&self, number: Number) -> bool {
        number <= LASTNUMBER && self.mask & Self::bit(number) != 0
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.order.len() == UNIVERSE_SIZE
    }

    pub fn remaining(&self) -> usize {
        UNIVERSE_SIZE - self.order.len()
    }

    /// Numbers in draw order.
    pub fn numbers(&self) -> &[Number] {
        &self.order
    }

    pub fn last(&self) -> Option<Number> {
        self.order.last().copied()
    }

    pub fn sorted(&self) -> Vec<Number> {
        let mut sorted = self.order.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Up to `n` numbers drawn before the latest one, newest first.
    pub fn last_numbers(&self, n: usize) -> Vec<Number> {
        if self.order.len() <= 1 {
            return Vec::new();
        }

        let available_previous = self.order.len() - 1;
        let numbers_to_show = std::cmp::min(n, available_previous);
        let start_index = self.order.len() - numbers_to_show - 1;
        let end_index = self.order.len() - 1;

        let mut result: Vec<Number> = self.order[start_index..end_index].to_vec();
        result.reverse();
        result
    }

    /// Called numbers split by column letter, each list in draw order.
    pub fn group_by_column(&self) -> [Vec<Number>; COLUMNS_PER_CARD] {
        let mut groups: [Vec<Number>; COLUMNS_PER_CARD] = Default::default();
        for &number in &self.order {
            if let Some(column) = Column::for_number(number) {
                groups[column.index()].push(number);
            }
        }
        groups
    }

    /// Progress label such as `12/75`.
    pub fn progress(&self) -> String {
        format!("{}/{}", self.order.len(), UNIVERSE_SIZE)
    }
}

impl Serialize for DrawnSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.order)
    }
}
