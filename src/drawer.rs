// src/drawer.rs
// Drawing the next number of the game.

use rand::Rng;

use crate::board::DrawnSet;
use crate::defs::{FIRSTNUMBER, LASTNUMBER, Number};
use crate::error::BingoError;

/// Draws a number not yet in `drawn`, using the thread RNG.
///
/// When every number has been called this returns `LASTNUMBER` instead of a
/// fresh value, so it can repeat a number already on the board. Use
/// [`try_draw`] to get an explicit error in that case.
pub fn draw(drawn: &DrawnSet) -> Number {
    draw_with(drawn, &mut rand::rng())
}

pub fn draw_with<R: Rng>(drawn: &DrawnSet, rng: &mut R) -> Number {
    if drawn.is_full() {
        return LASTNUMBER;
    }

    loop {
        let candidate = rng.random_range(FIRSTNUMBER..=LASTNUMBER);
        if !drawn.contains(candidate) {
            return candidate;
        }
    }
}

pub fn try_draw(drawn: &DrawnSet) -> Result<Number, BingoError> {
    try_draw_with(drawn, &mut rand::rng())
}

pub fn try_draw_with<R: Rng>(drawn: &DrawnSet, rng: &mut R) -> Result<Number, BingoError> {
    if drawn.is_full() {
        return Err(BingoError::Exhausted);
    }
    Ok(draw_with(drawn, rng))
}
