use std::collections::HashMap;
use std::fmt::Debug;

use super::trait_def::format_debug;
use crate::{adjacency_matrix::AdjacencyMatrix, util::is_valid_weight};

/// Hash-based symmetric adjacency matrix for sparse graphs.
///
/// Memory is proportional to the number of entries rather than `size²`.
/// Each entry is stored under both orientations so that a row scan only
/// touches the row's actual entries.
#[derive(Clone)]
pub struct HashAdjacencyMatrix {
    size: usize,
    // Invariant: entries[a][b] == entries[b][a] for every stored pair, and a != b.
    entries: HashMap<usize, HashMap<usize, f64>>,
}

impl AdjacencyMatrix for HashAdjacencyMatrix {
    fn with_size(size: usize) -> Self {
        Self {
            size,
            entries: HashMap::new(),
        }
    }

    fn size(&self) -> usize {
        self.size
    }

    fn insert(&mut self, row: usize, col: usize, weight: f64) -> Option<f64> {
        debug_assert!(is_valid_weight(weight), "invalid weight {weight}");
        assert!(
            row != col && row < self.size && col < self.size,
            "cannot store ({row}, {col}) in a symmetric {size}x{size} matrix",
            size = self.size
        );
        self.entries.entry(col).or_default().insert(row, weight);
        self.entries.entry(row).or_default().insert(col, weight)
    }

    fn get(&self, row: usize, col: usize) -> Option<&f64> {
        self.entries.get(&row).and_then(|targets| targets.get(&col))
    }

    fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.entries.iter().flat_map(|(&row, targets)| {
            targets
                .iter()
                .filter(move |(col, _)| row < **col)
                .map(move |(&col, &weight)| (row, col, weight))
        })
    }

    fn entries_in_row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries
            .get(&row)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(&col, &weight)| (col, weight)))
    }

    fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum::<usize>() / 2
    }

    fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}

impl Debug for HashAdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "HashAdjacencyMatrix")
    }
}
