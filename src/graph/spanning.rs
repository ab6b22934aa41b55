use std::cmp::Ordering;

use pathfinding::prelude::kruskal_indices;

use super::WeightedGraph;
use crate::{adjacency_matrix::AdjacencyMatrix, tracing_support::info_span};

/// An edge weight ordered by `f64::total_cmp`, so Kruskal's algorithm can
/// sort by it.  Stored weights are always finite and positive, where this
/// agrees with the usual ordering.
#[derive(Clone, Copy, Debug)]
struct TotalWeight(f64);

impl PartialEq for TotalWeight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TotalWeight {}

impl PartialOrd for TotalWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl<M> WeightedGraph<M>
where
    M: AdjacencyMatrix,
{
    /// Returns a minimum spanning forest: a graph on the same vertices whose
    /// edges connect every connected component with the least total weight.
    /// A connected graph yields a minimum spanning tree.
    pub fn minimum_spanning_forest(&self) -> Self {
        let _span = info_span!("minimum_spanning_forest").entered();
        let vertex_count = self.vertex_count();
        let mut forest = Self::with_vertex_count(vertex_count);
        if vertex_count < 2 {
            return forest;
        }
        let edges: Vec<_> = self
            .matrix
            .iter()
            .map(|(u, v, weight)| (u, v, TotalWeight(weight)))
            .collect();
        for (u, v, TotalWeight(weight)) in kruskal_indices(vertex_count, &edges) {
            forest.matrix.insert(u, v, weight);
        }
        forest
    }
}
