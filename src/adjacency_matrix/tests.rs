use std::collections::BTreeMap;

use quickcheck::{Arbitrary, Gen};

use crate::adjacency_matrix::AdjacencyMatrix;

/// A random matrix together with a plain map of the entries it should hold,
/// keyed by `(low, high)`.
#[derive(Clone, Debug)]
pub struct ArbMatrix<M> {
    pub matrix: M,
    pub model: BTreeMap<(usize, usize), f64>,
}

impl<M> Arbitrary for ArbMatrix<M>
where
    M: AdjacencyMatrix + Clone + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let size = usize::arbitrary(g) % 16;
        let num_inserts = usize::arbitrary(g) % 40;
        let mut matrix = M::with_size(size);
        let mut model = BTreeMap::new();
        if size >= 2 {
            for _ in 0..num_inserts {
                let row = usize::arbitrary(g) % size;
                let col = usize::arbitrary(g) % size;
                if row == col {
                    continue;
                }
                let weight = f64::from(u8::arbitrary(g) % 50 + 1) / 4.0;
                matrix.insert(row, col, weight);
                model.insert((row.min(col), row.max(col)), weight);
            }
        }
        ArbMatrix { matrix, model }
    }
}

macro_rules! adjacency_matrix_tests {
    ($mod_name:ident, $matrix:ty) => {
        mod $mod_name {
            use quickcheck_macros::quickcheck;

            use super::ArbMatrix;
            use $crate::adjacency_matrix::AdjacencyMatrix;

            type Matrix = $matrix;

            #[quickcheck]
            fn prop_get_matches_model(ArbMatrix { matrix, model }: ArbMatrix<Matrix>) -> bool {
                (0..matrix.size()).all(|i| {
                    (0..matrix.size()).all(|j| {
                        let key = (i.min(j), i.max(j));
                        matrix.get(i, j).copied() == model.get(&key).copied()
                    })
                })
            }

            #[quickcheck]
            fn prop_get_is_symmetric(ArbMatrix { matrix, .. }: ArbMatrix<Matrix>) -> bool {
                (0..matrix.size())
                    .all(|i| (0..matrix.size()).all(|j| matrix.get(i, j) == matrix.get(j, i)))
            }

            #[quickcheck]
            fn prop_iter_matches_model(ArbMatrix { matrix, model }: ArbMatrix<Matrix>) -> bool {
                let mut entries: Vec<_> = matrix.iter().collect();
                entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
                let expected: Vec<_> = model.iter().map(|(&(i, j), &w)| (i, j, w)).collect();
                entries == expected
            }

            #[quickcheck]
            fn prop_entries_in_row_consistent(
                ArbMatrix { matrix, model }: ArbMatrix<Matrix>,
            ) -> bool {
                (0..matrix.size()).all(|row| {
                    let mut entries: Vec<_> = matrix.entries_in_row(row).collect();
                    entries.sort_by_key(|(col, _)| *col);
                    let mut expected: Vec<_> = model
                        .iter()
                        .filter_map(|(&(i, j), &w)| match row {
                            r if r == i => Some((j, w)),
                            r if r == j => Some((i, w)),
                            _ => None,
                        })
                        .collect();
                    expected.sort_by_key(|(col, _)| *col);
                    entries == expected
                })
            }

            #[quickcheck]
            fn prop_len_matches_model(ArbMatrix { matrix, model }: ArbMatrix<Matrix>) -> bool {
                matrix.len() == model.len() && matrix.is_empty() == model.is_empty()
            }

            #[test]
            fn test_insert_returns_previous() {
                let mut matrix = Matrix::with_size(3);
                assert_eq!(matrix.insert(0, 1, 1.0), None);
                assert_eq!(matrix.insert(1, 0, 2.0), Some(1.0));
                assert_eq!(matrix.get(0, 1), Some(&2.0));
                assert_eq!(matrix.len(), 1);
            }

            #[test]
            fn test_get_outside_matrix() {
                let mut matrix = Matrix::with_size(3);
                matrix.insert(0, 2, 1.0);
                assert_eq!(matrix.get(0, 3), None);
                assert_eq!(matrix.get(7, 2), None);
                assert_eq!(matrix.get(2, 2), None);
                assert!(!matrix.contains(1, 2));
                assert!(matrix.contains(2, 0));
            }

            #[test]
            fn test_entries_in_row_outside_matrix() {
                let matrix = Matrix::with_size(3);
                assert_eq!(matrix.entries_in_row(3).count(), 0);
            }

            #[test]
            #[should_panic]
            fn test_insert_diagonal_panics() {
                let mut matrix = Matrix::with_size(3);
                matrix.insert(1, 1, 1.0);
            }

            #[test]
            #[should_panic]
            fn test_insert_out_of_range_panics() {
                let mut matrix = Matrix::with_size(3);
                matrix.insert(0, 3, 1.0);
            }
        }
    };
}

adjacency_matrix_tests!(dense, crate::adjacency_matrix::DenseAdjacencyMatrix);
adjacency_matrix_tests!(hash, crate::adjacency_matrix::HashAdjacencyMatrix);
