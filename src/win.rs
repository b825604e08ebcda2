// src/win.rs
// Column win detection for a card against the called numbers.

use std::collections::BTreeSet;

use crate::board::DrawnSet;
use crate::card::Card;
use crate::defs::{Column, Number};

/// Columns of `card` whose five numbers have all been called.
pub fn winning_columns(card: &Card, drawn: &DrawnSet) -> Vec<Column> {
    Column::ALL
        .into_iter()
        .filter(|&column| card.column(column).iter().all(|&n| drawn.contains(n)))
        .collect()
}

/// Numbers of `card` that sit in a fully called column.
///
/// Only columns count; rows and diagonals never win.
pub fn winning_cells(card: &Card, drawn: &DrawnSet) -> BTreeSet<Number> {
    winning_columns(card, drawn)
        .into_iter()
        .flat_map(|column| card.column(column).iter().copied())
        .collect()
}

pub fn is_winner(card: &Card, drawn: &DrawnSet) -> bool {
    Column::ALL
        .into_iter()
        .any(|column| card.column(column).iter().all(|&n| drawn.contains(n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::generate_card;

    fn reference_card() -> Card {
        Card::from_columns([
            [1, 2, 3, 4, 5],
            [16, 17, 18, 19, 20],
            [31, 32, 33, 34, 35],
            [46, 47, 48, 49, 50],
            [61, 62, 63, 64, 65],
        ])
        .unwrap()
    }

    #[test]
    fn test_nothing_wins_without_draws() {
        let drawn = DrawnSet::new();
        assert!(winning_cells(&reference_card(), &drawn).is_empty());
        for _ in 0..20 {
            let card = generate_card();
            assert!(winning_cells(&card, &drawn).is_empty());
            assert!(!is_winner(&card, &drawn));
        }
    }

    #[test]
    fn test_single_column_win() {
        let drawn = DrawnSet::from_numbers([1, 2, 3, 4, 5]).unwrap();
        let card = reference_card();
        let expected: BTreeSet<Number> = [1, 2, 3, 4, 5].into_iter().collect();
        assert_eq!(winning_cells(&card, &drawn), expected);
        assert_eq!(winning_columns(&card, &drawn), vec![Column::B]);
        assert!(is_winner(&card, &drawn));
    }

    #[test]
    fn test_all_columns_win() {
        let card = reference_card();
        let drawn = DrawnSet::from_numbers(card.numbers()).unwrap();
        let expected: BTreeSet<Number> = card.numbers().collect();
        assert_eq!(winning_cells(&card, &drawn), expected);
        assert_eq!(winning_cells(&card, &drawn).len(), 25);
        assert_eq!(winning_columns(&card, &drawn), Column::ALL.to_vec());
    }

    #[test]
    fn test_four_of_five_does_not_win() {
        let drawn = DrawnSet::from_numbers([1, 2, 3, 4]).unwrap();
        let card = reference_card();
        assert!(winning_cells(&card, &drawn).is_empty());
        assert!(!is_winner(&card, &drawn));
    }

    #[test]
    fn test_rows_do_not_win() {
        // First row of every column: 1, 16, 31, 46, 61
        let drawn = DrawnSet::from_numbers([1, 16, 31, 46, 61]).unwrap();
        assert!(winning_cells(&reference_card(), &drawn).is_empty());
    }

    #[test]
    fn test_union_of_several_columns() {
        let drawn = DrawnSet::from_numbers([
            31, 32, 33, 34, 35, 61, 62, 63, 64, 65, // N and O complete
            16, 17, 18, 19, // I one short
            9, 70,
        ])
        .unwrap();
        let card = reference_card();
        let expected: BTreeSet<Number> =
            [31, 32, 33, 34, 35, 61, 62, 63, 64, 65].into_iter().collect();
        assert_eq!(winning_cells(&card, &drawn), expected);
        assert_eq!(winning_columns(&card, &drawn), vec![Column::N, Column::O]);
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let card = reference_card();
        let drawn = DrawnSet::from_numbers([46, 47, 48, 49, 50, 2]).unwrap();
        let first = winning_cells(&card, &drawn);
        let second = winning_cells(&card, &drawn);
        assert_eq!(first, second);
    }

    mod properties {
        use proptest::prelude::*;
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use std::collections::BTreeSet;

        use crate::board::DrawnSet;
        use crate::card::generate_card_with;
        use crate::defs::Number;
        use crate::win::{is_winner, winning_cells};

        proptest! {
            #[test]
            fn prop_win_set_is_union_of_full_columns(
                called in proptest::collection::btree_set(1u8..=75, 0..=75),
                seed in any::<u64>()
            ) {
                let card = generate_card_with(&mut StdRng::seed_from_u64(seed));
                let drawn = DrawnSet::from_numbers(called.iter().copied()).unwrap();
                let expected: BTreeSet<Number> = card
                    .columns()
                    .iter()
                    .filter(|column| column.iter().all(|n| called.contains(n)))
                    .flat_map(|column| column.iter().copied())
                    .collect();
                let cells = winning_cells(&card, &drawn);
                prop_assert_eq!(is_winner(&card, &drawn), !cells.is_empty());
                prop_assert_eq!(cells, expected);
            }
        }
    }
}
