/// Storage for the edge weights of an undirected graph with a fixed number of
/// vertices.
///
/// Entries are symmetric: `get(row, col)` and `get(col, row)` always agree, and
/// writing either orientation writes both.  The diagonal is never stored.
/// Implementations only hold strictly positive weights; an absent entry is
/// reported as `None`.
pub trait AdjacencyMatrix
where
    Self: Sized,
{
    /// Creates a matrix with `size` rows and columns and no entries.
    fn with_size(size: usize) -> Self;

    /// Returns the number of rows (and columns).
    fn size(&self) -> usize;

    /// Stores `weight` at `(row, col)` and `(col, row)`, returning the
    /// previous weight, if any.
    ///
    /// # Panics
    ///
    /// Panics if `row == col` or either index is not below [`size`](Self::size).
    /// Callers are expected to have validated the entry.
    fn insert(&mut self, row: usize, col: usize, weight: f64) -> Option<f64>;

    /// Gets the weight at `(row, col)`.  Returns `None` for absent entries,
    /// the diagonal, and indices outside the matrix.
    fn get(&self, row: usize, col: usize) -> Option<&f64>;

    /// Iterates over all entries as `(row, col, weight)` with `row < col`, so
    /// each symmetric pair appears once.
    fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_;

    /// Iterates over the entries in `row` as `(col, weight)`.  Yields nothing
    /// if `row` is outside the matrix.
    fn entries_in_row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_;

    /// Returns `true` if there is an entry at `(row, col)`.
    fn contains(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Returns the number of stored pairs.
    fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the matrix holds no entries.
    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

pub(crate) fn format_debug<M>(
    matrix: &M,
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
) -> std::fmt::Result
where
    M: AdjacencyMatrix,
{
    f.debug_struct(name)
        .field("size", &matrix.size())
        .field("entries", &matrix.iter().collect::<Vec<_>>())
        .finish()
}
