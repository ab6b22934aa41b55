use std::fmt::Debug;

use super::indexing::SymmetricIndexing;
use super::trait_def::format_debug;
use crate::{adjacency_matrix::AdjacencyMatrix, util::is_valid_weight};

/// Dense symmetric adjacency matrix.
///
/// Uses a packed triangular representation where only the cells above the
/// diagonal are stored, so each undirected pair has exactly one cell.  A cell
/// holding `0.0` is an absent entry.  Lookups are O(1) and a row scan visits
/// every column, O(size).
#[derive(Clone)]
pub struct DenseAdjacencyMatrix {
    // Invariant: every cell is either 0.0 or a finite positive weight.
    weights: Vec<f64>,
    indexing: SymmetricIndexing,
}

impl AdjacencyMatrix for DenseAdjacencyMatrix {
    fn with_size(size: usize) -> Self {
        let indexing = SymmetricIndexing::new(size);
        Self {
            weights: vec![0.0; indexing.storage_size()],
            indexing,
        }
    }

    fn size(&self) -> usize {
        self.indexing.size()
    }

    fn insert(&mut self, row: usize, col: usize, weight: f64) -> Option<f64> {
        debug_assert!(is_valid_weight(weight), "invalid weight {weight}");
        let Some(index) = self.indexing.index(row, col) else {
            panic!(
                "cannot store ({row}, {col}) in a symmetric {size}x{size} matrix",
                size = self.size()
            );
        };
        let previous = std::mem::replace(&mut self.weights[index], weight);
        (previous > 0.0).then_some(previous)
    }

    fn get(&self, row: usize, col: usize) -> Option<&f64> {
        self.indexing
            .index(row, col)
            .map(|index| &self.weights[index])
            .filter(|weight| **weight > 0.0)
    }

    fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, weight)| **weight > 0.0)
            .map(|(index, &weight)| {
                let (row, col) = self.indexing.coordinates(index);
                (row, col, weight)
            })
    }

    fn entries_in_row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indexing
            .row(row)
            .map(|(col, index)| (col, self.weights[index]))
            .filter(|(_, weight)| *weight > 0.0)
    }
}

impl Debug for DenseAdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "DenseAdjacencyMatrix")
    }
}
