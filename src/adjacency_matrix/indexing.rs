use crate::util::sort_pair;

/// Calculates the nth triangular number, `n(n+1)/2`.
pub(crate) fn triangular(n: usize) -> usize {
    (n * (n + 1)) / 2
}

/// Returns the largest `n` such that `triangular(n) <= k`.
pub(crate) fn triangular_inv_floor(k: usize) -> usize {
    // n^2 + n - 2k = 0, solved with the quadratic formula.
    ((1 + 8 * k).isqrt() - 1) / 2
}

/// Indexing for a symmetric matrix with an empty diagonal, stored in a flat
/// array.  Only entries strictly above the diagonal are stored, column by
/// column, so a 5×5 matrix needs 10 cells:
///
/// ```text
/// ⎛ - 0 1 3 6 ⎞
/// ⎟ 0 - 2 4 7 ⎟
/// ⎟ 1 2 - 5 8 ⎟
/// ⎟ 3 4 5 - 9 ⎟
/// ⎝ 6 7 8 9 - ⎠
/// ```
///
/// The pair `(i, j)` with `i < j` lives at `triangular(j - 1) + i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SymmetricIndexing {
    size: usize,
}

impl SymmetricIndexing {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells needed to store every off-diagonal pair.
    pub fn storage_size(&self) -> usize {
        triangular(self.size.saturating_sub(1))
    }

    /// Returns the flat index of `(i, j)`, or `None` for the diagonal and
    /// out-of-range coordinates.
    pub fn index(&self, i: usize, j: usize) -> Option<usize> {
        (i != j && i < self.size && j < self.size).then(|| self.unchecked_index(i, j))
    }

    /// Flat index of `(i, j)`.  The result is meaningless if `i == j`.
    pub fn unchecked_index(&self, i: usize, j: usize) -> usize {
        let (lo, hi) = sort_pair(i, j);
        debug_assert!(lo < hi);
        triangular(hi - 1) + lo
    }

    /// Returns the `(i, j)` coordinates of a flat index, with `i < j`.
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        let hi_minus_one = triangular_inv_floor(index);
        (index - triangular(hi_minus_one), hi_minus_one + 1)
    }

    /// Iterates over `(column, flat index)` for every off-diagonal cell in
    /// `row`, in ascending column order.  Empty if `row` is out of range.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = if row < self.size { 0..self.size } else { 0..0 };
        columns
            .filter(move |&col| col != row)
            .map(move |col| (col, self.unchecked_index(row, col)))
    }
}
