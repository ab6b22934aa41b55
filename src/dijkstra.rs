use bitvec::vec::BitVec;
use derivative::Derivative;

use crate::{
    adjacency_matrix::AdjacencyMatrix,
    graph::WeightedGraph,
    path::ShortestPath,
    tracing_support::trace,
};

/// State of a single-source Dijkstra search over a [`WeightedGraph`].
///
/// The next vertex to settle is chosen by a linear scan over the unsettled
/// vertices, so each step costs O(V) and a full run O(V²).  Equal distances
/// resolve to the lowest vertex index.  Edge weights are positive by
/// construction of the graph, so a settled distance is final.
///
/// A distance of `None` means the vertex has not been reached.  A reached
/// vertex may still have an infinite distance when the sum of finite weights
/// overflows, and it is searched like any other.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""))]
pub(crate) struct Dijkstra<'g, M> {
    #[derivative(Debug = "ignore")]
    graph: &'g WeightedGraph<M>,
    source: usize,
    distances: Vec<Option<f64>>,
    // `predecessors[source] == Some(source)` so path reconstruction stops there.
    predecessors: Vec<Option<usize>>,
    settled: BitVec,
}

impl<'g, M> Dijkstra<'g, M>
where
    M: AdjacencyMatrix,
{
    /// Starts a search from `source`.  The caller must ensure `source` is a
    /// vertex of `graph`.
    pub fn new(graph: &'g WeightedGraph<M>, source: usize) -> Self {
        let vertex_count = graph.vertex_count();
        debug_assert!(source < vertex_count);
        let mut distances = vec![None; vertex_count];
        let mut predecessors = vec![None; vertex_count];
        distances[source] = Some(0.0);
        predecessors[source] = Some(source);
        Self {
            graph,
            source,
            distances,
            predecessors,
            settled: BitVec::repeat(false, vertex_count),
        }
    }

    /// Returns the reached, unsettled vertex with the smallest tentative
    /// distance, or `None` when every remaining vertex is unreachable.
    fn next_vertex(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for vertex in self.settled.iter_zeros() {
            let Some(distance) = self.distances[vertex] else {
                continue;
            };
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((vertex, distance));
            }
        }
        best.map(|(vertex, _)| vertex)
    }

    /// Marks `current` as settled and relaxes the edges to its unsettled
    /// neighbors.
    fn settle(&mut self, current: usize) {
        self.settled.set(current, true);
        let Some(current_distance) = self.distances[current] else {
            return;
        };
        trace!(vertex = current, distance = current_distance, "settled");
        let graph = self.graph;
        for (neighbor, weight) in graph.matrix().entries_in_row(current) {
            if self.settled[neighbor] {
                continue;
            }
            let candidate = current_distance + weight;
            if self.distances[neighbor].is_none_or(|distance| candidate < distance) {
                trace!(vertex = neighbor, via = current, distance = candidate, "relaxed");
                self.distances[neighbor] = Some(candidate);
                self.predecessors[neighbor] = Some(current);
            }
        }
    }

    /// Runs until `target` is the next vertex to settle.  Returns `false` if
    /// the reachable vertices run out first.
    pub fn run_until(&mut self, target: usize) -> bool {
        while let Some(current) = self.next_vertex() {
            if current == target {
                return true;
            }
            self.settle(current);
        }
        false
    }

    /// Runs until every vertex reachable from the source is settled.
    pub fn run_to_completion(&mut self) {
        while let Some(current) = self.next_vertex() {
            self.settle(current);
        }
    }

    /// Vertices with a known distance from the source.
    pub fn reached(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.distances.len()).filter(|&vertex| self.distances[vertex].is_some())
    }

    /// Rebuilds the path to `target` by walking predecessors back to the
    /// source.  Returns `None` if `target` has not been reached.  The result is
    /// only a shortest path once `target` has been selected by the search.
    pub fn path_to(&self, target: usize) -> Option<ShortestPath> {
        let total_weight = (*self.distances.get(target)?)?;
        let mut vertices = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            vertices.push(current);
        }
        vertices.reverse();
        Some(ShortestPath::new(vertices, total_weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> WeightedGraph {
        // 0 -1- 1 -1- 3
        //  \         /
        //   1- 2 -1-
        WeightedGraph::from_edges([(0, 1, 1.0), (1, 3, 1.0), (0, 2, 1.0), (2, 3, 1.0)]).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let graph = diamond();
        let search = Dijkstra::new(&graph, 2);
        assert_eq!(search.distances, vec![None, None, Some(0.0), None]);
        assert_eq!(search.predecessors, vec![None, None, Some(2), None]);
        assert_eq!(search.settled.count_ones(), 0);
        assert_eq!(search.next_vertex(), Some(2));
    }

    #[test]
    fn test_ties_prefer_lowest_index() {
        let graph = diamond();
        let mut search = Dijkstra::new(&graph, 0);
        assert!(search.run_until(3));
        // Both 1 and 2 reach 3 at distance 2; 1 is settled first and wins.
        assert_eq!(search.path_to(3).unwrap(), vec![0, 1, 3]);
    }

    #[test]
    fn test_stops_when_target_selected() {
        let graph = diamond();
        let mut search = Dijkstra::new(&graph, 0);
        assert!(search.run_until(1));
        assert!(search.settled[0]);
        assert!(!search.settled[1]);
        assert!(!search.settled[2]);
    }

    #[test]
    fn test_unreachable_target_terminates() {
        let mut graph = WeightedGraph::new(4);
        graph.add_edge((0, 1, 1.0)).unwrap();
        let mut search = Dijkstra::new(&graph, 0);
        assert!(!search.run_until(3));
        assert_eq!(search.next_vertex(), None);
        assert_eq!(search.path_to(3), None);
        assert_eq!(search.reached().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_overflowing_distance_is_still_reached() {
        let graph = WeightedGraph::from_edges([(0, 1, f64::MAX), (1, 2, f64::MAX)]).unwrap();
        let mut search = Dijkstra::new(&graph, 0);
        assert!(search.run_until(2));
        assert_eq!(search.distances[2], Some(f64::INFINITY));
        assert_eq!(search.path_to(2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_path_to_out_of_range() {
        let graph = diamond();
        let mut search = Dijkstra::new(&graph, 0);
        search.run_to_completion();
        assert_eq!(search.path_to(17), None);
    }

    #[test]
    fn test_debug_skips_graph() {
        let graph = diamond();
        let search = Dijkstra::new(&graph, 0);
        let debug_str = format!("{:?}", search.clone());
        assert!(debug_str.contains("distances"));
        assert!(!debug_str.contains("WeightedGraph"));
    }
}
