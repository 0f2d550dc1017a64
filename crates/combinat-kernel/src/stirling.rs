//! Bottom-up table of Stirling numbers of the second kind.
//!
//! Cells follow `S(i, j) = S(i-1, j-1) + j * S(i-1, j)` with the boundary
//! `S(0, 0) = 1`, `S(i, 0) = 0` for `i > 0` and `S(i, 1) = 1` for `i >= 1`.
//! Rows are filled in increasing `i`, and within a row in increasing `j` up
//! to `min(i, columns)`, so every cell reads only cells of the previous row.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Transient memo table for one Stirling query.
#[derive(Debug, Clone)]
pub(crate) struct StirlingTable {
    cells: Vec<Vec<BigUint>>,
}

impl StirlingTable {
    /// Fills `S(i, j)` for `0 <= i <= rows` and `0 <= j <= columns`.
    ///
    /// Cells with `j > i` stay zero.
    pub(crate) fn build(rows: usize, columns: usize) -> Self {
        tracing::trace!(rows, columns, "filling stirling table");

        let mut cells = vec![vec![BigUint::zero(); columns + 1]; rows + 1];
        cells[0][0] = BigUint::one();

        for i in 1..=rows {
            if columns >= 1 {
                cells[i][1] = BigUint::one();
            }
            for j in 2..=i.min(columns) {
                let cell = &cells[i - 1][j - 1] + &cells[i - 1][j] * j;
                cells[i][j] = cell;
            }
        }

        Self { cells }
    }

    /// Reads `S(n, k)` from the filled table.
    ///
    /// Panics if `(n, k)` lies outside the dimensions passed to `build`.
    pub(crate) fn cell(&self, n: usize, k: usize) -> &BigUint {
        &self.cells[n][k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    fn cell(table: &StirlingTable, n: usize, k: usize) -> u64 {
        table.cell(n, k).to_u64().unwrap()
    }

    #[test]
    fn table_matches_known_triangle() {
        let table = StirlingTable::build(6, 6);
        let row5 = [0, 1, 15, 25, 10, 1];
        for (k, expected) in row5.iter().enumerate() {
            assert_eq!(cell(&table, 5, k), *expected, "S(5, {k})");
        }
        let row6 = [0, 1, 31, 90, 65, 15, 1];
        for (k, expected) in row6.iter().enumerate() {
            assert_eq!(cell(&table, 6, k), *expected, "S(6, {k})");
        }
    }

    #[test]
    fn narrow_table_agrees_with_wide_table() {
        let narrow = StirlingTable::build(9, 3);
        let wide = StirlingTable::build(9, 9);
        for n in 0..=9 {
            for k in 0..=3 {
                assert_eq!(narrow.cell(n, k), wide.cell(n, k), "S({n}, {k})");
            }
        }
    }

    #[test]
    fn cells_above_diagonal_are_zero() {
        let table = StirlingTable::build(3, 5);
        assert_eq!(cell(&table, 2, 4), 0);
        assert_eq!(cell(&table, 3, 3), 1);
    }

    #[test]
    fn degenerate_dimensions() {
        let table = StirlingTable::build(0, 0);
        assert_eq!(cell(&table, 0, 0), 1);

        let table = StirlingTable::build(4, 0);
        assert_eq!(cell(&table, 4, 0), 0);
    }
}
