#[cfg(feature = "pathfinding")]
mod spanning;

use std::{
    collections::HashMap,
    fmt::{self, Debug},
    ops::{Index, Range},
};

#[cfg(feature = "pathfinding")]
use std::collections::HashSet;

use crate::{
    adjacency_matrix::{AdjacencyMatrix, DenseAdjacencyMatrix, HashAdjacencyMatrix},
    dijkstra::Dijkstra,
    edge::Edge,
    error::{GraphError, InvalidEdgeReason},
    path::ShortestPath,
    tracing_support::{debug, info_span},
};

/// Weight reported for vertex pairs with no edge.
static NO_EDGE: f64 = 0.0;

/// An undirected graph with positive edge weights over the vertices
/// `0..vertex_count()`.
///
/// The vertex count is fixed when the graph is built; afterwards the graph
/// only changes by adding edges or overwriting their weights.  There is at
/// most one edge between two vertices and never an edge from a vertex to
/// itself.  Weights live in an [`AdjacencyMatrix`], by default the dense
/// [`DenseAdjacencyMatrix`].
///
/// ```
/// use densegraph::WeightedGraph;
///
/// let graph = WeightedGraph::from_edges([(0, 1, 2.0), (1, 2, 2.0), (0, 2, 10.0)]).unwrap();
/// let path = graph.shortest_path(0, 2).unwrap();
/// assert_eq!(path, [0, 1, 2]);
/// assert_eq!(path.total_weight(), 4.0);
/// ```
#[derive(Clone)]
pub struct WeightedGraph<M = DenseAdjacencyMatrix> {
    matrix: M,
}

/// A [`WeightedGraph`] stored in a hash map, for large sparse graphs.
pub type SparseWeightedGraph = WeightedGraph<HashAdjacencyMatrix>;

impl WeightedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_vertex_count(vertex_count)
    }

    /// Creates a graph from a list of edges.  See [`WeightedGraph::with_edges`].
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        Self::with_edges(edges)
    }
}

impl<M> WeightedGraph<M>
where
    M: AdjacencyMatrix,
{
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            matrix: M::with_size(vertex_count),
        }
    }

    /// Creates a graph containing `edges`.  The vertex count is one more than
    /// the largest endpoint, or zero if there are no edges.
    ///
    /// Edges are inserted in order, so when the same pair of vertices appears
    /// more than once the last weight wins.  Fails without building anything
    /// if any edge is a self-loop or has a weight that is not finite and
    /// positive, or if an endpoint is `usize::MAX`, which would leave no room
    /// for the vertex count.
    pub fn with_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().map(Into::into).collect();
        for edge in &edges {
            edge.validate(None).map_err(|reason| {
                debug!(%edge, %reason, "rejected edge");
                GraphError::invalid_edge(*edge, reason)
            })?;
        }
        let vertex_count = match edges.iter().max_by_key(|edge| edge.max_vertex()) {
            None => 0,
            Some(edge) => edge.max_vertex().checked_add(1).ok_or_else(|| {
                let reason = InvalidEdgeReason::OutOfRange {
                    vertex: edge.max_vertex(),
                    vertex_count: usize::MAX,
                };
                debug!(%edge, %reason, "rejected edge");
                GraphError::invalid_edge(*edge, reason)
            })?,
        };
        let mut graph = Self::with_vertex_count(vertex_count);
        for edge in &edges {
            graph.matrix.insert(edge.u, edge.v, edge.weight);
        }
        debug!(
            vertex_count,
            edge_count = graph.edge_count(),
            "built graph from edge list"
        );
        Ok(graph)
    }

    /// Returns the underlying weight storage.
    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    pub fn vertex_count(&self) -> usize {
        self.matrix.size()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.matrix.len()
    }

    /// Returns `true` if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    pub fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// Iterates over every edge once, with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.matrix
            .iter()
            .map(|(u, v, weight)| Edge::new(u, v, weight))
    }

    /// Iterates over `(neighbor, weight)` for each edge at `vertex`.  Yields
    /// nothing if `vertex` is not in the graph.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.matrix.entries_in_row(vertex)
    }

    /// Returns the number of edges at `vertex`, or zero if `vertex` is not in
    /// the graph.
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).count()
    }

    /// Returns the sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.matrix.iter().map(|(_, _, weight)| weight).sum()
    }

    fn check(&self, edge: &Edge) -> Result<(), GraphError> {
        edge.validate(Some(self.vertex_count())).map_err(|reason| {
            debug!(%edge, %reason, "rejected edge");
            GraphError::invalid_edge(*edge, reason)
        })
    }

    /// Adds an edge, or replaces the weight of an existing edge between the
    /// same vertices.  Returns the previous weight, if any.
    ///
    /// Fails with [`GraphError::InvalidEdge`] if the edge is a self-loop, its
    /// weight is not finite and positive, or an endpoint is not in the graph.
    pub fn add_edge(&mut self, edge: impl Into<Edge>) -> Result<Option<f64>, GraphError> {
        let edge = edge.into();
        self.check(&edge)?;
        Ok(self.matrix.insert(edge.u, edge.v, edge.weight))
    }

    /// Adds several edges in order; a later edge between the same vertices
    /// overwrites an earlier one.
    ///
    /// The batch is all or nothing.  Every edge is checked before any is
    /// written, and on failure the error describes the first invalid edge and
    /// the graph is left untouched.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().map(Into::into).collect();
        for (position, edge) in edges.iter().enumerate() {
            if let Err(err) = self.check(edge) {
                debug!(position, batch_size = edges.len(), "rejected edge batch");
                return Err(err);
            }
        }
        for edge in &edges {
            self.matrix.insert(edge.u, edge.v, edge.weight);
        }
        debug!(batch_size = edges.len(), "added edge batch");
        Ok(())
    }

    /// Returns the weight between `a` and `b`, or `0.0` if they share no
    /// edge.  This is the same as `graph[(a, b)]`.
    ///
    /// # Panics
    ///
    /// The caller guarantees that both vertices are in the graph.  An
    /// out-of-range vertex is a programming error and panics, like slice
    /// indexing.  Use [`weight`](Self::weight) or [`has_edge`](Self::has_edge)
    /// for input that has not been validated.
    pub fn weight_unchecked(&self, a: usize, b: usize) -> f64 {
        self[(a, b)]
    }

    /// Returns the weight of the edge between `a` and `b`.
    ///
    /// Fails with [`GraphError::NoSuchEdge`] if there is no such edge,
    /// including when either vertex is not in the graph.
    pub fn weight(&self, a: usize, b: usize) -> Result<f64, GraphError> {
        self.matrix
            .get(a, b)
            .copied()
            .ok_or(GraphError::NoSuchEdge { u: a, v: b })
    }

    /// Returns `true` if `a` and `b` are joined by an edge.  Vertices that are
    /// not in the graph are never connected.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.matrix.contains(a, b)
    }

    /// Finds a lowest-weight path from `source` to `target` using Dijkstra's
    /// algorithm.
    ///
    /// Returns `None` if `target` cannot be reached from `source` or if either
    /// vertex is not in the graph.  When several paths share the lowest
    /// weight, vertices with lower indices are preferred.  Runs in O(V²).
    ///
    /// Every weight is finite, but their sum along a path can overflow.  Such
    /// a path is still returned, with an infinite
    /// [`total_weight`](ShortestPath::total_weight).
    pub fn shortest_path(&self, source: usize, target: usize) -> Option<ShortestPath> {
        let _span = info_span!("shortest_path", source, target).entered();
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            debug!(source, target, "vertex out of range");
            return None;
        }
        let mut search = Dijkstra::new(self, source);
        if search.run_until(target) {
            search.path_to(target)
        } else {
            debug!(source, target, "target unreachable");
            None
        }
    }

    /// Finds lowest-weight paths from `source` to every vertex it can reach.
    /// The source maps to the trivial path `[source]`.  Returns an empty map
    /// if `source` is not in the graph.
    pub fn shortest_paths(&self, source: usize) -> HashMap<usize, ShortestPath> {
        let _span = info_span!("shortest_paths", source).entered();
        if !self.contains_vertex(source) {
            return HashMap::new();
        }
        let mut search = Dijkstra::new(self, source);
        search.run_to_completion();
        search
            .reached()
            .filter_map(|vertex| search.path_to(vertex).map(|path| (vertex, path)))
            .collect()
    }

    /// Partitions the vertices into connected components.  Isolated vertices
    /// form components of their own.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Vec<HashSet<usize>> {
        pathfinding::prelude::connected_components(&self.vertices().collect::<Vec<_>>(), |&v| {
            self.neighbors(v).map(|(neighbor, _)| neighbor)
        })
    }
}

impl<M> Index<(usize, usize)> for WeightedGraph<M>
where
    M: AdjacencyMatrix,
{
    type Output = f64;

    /// Returns the weight between two vertices, `0.0` meaning no edge.
    /// Panics if either vertex is not in the graph.
    fn index(&self, (a, b): (usize, usize)) -> &f64 {
        let vertex_count = self.vertex_count();
        assert!(
            a < vertex_count && b < vertex_count,
            "vertex pair ({a}, {b}) out of range for a graph with {vertex_count} vertices"
        );
        self.matrix.get(a, b).unwrap_or(&NO_EDGE)
    }
}

impl<M> PartialEq for WeightedGraph<M>
where
    M: AdjacencyMatrix,
{
    /// Graphs are equal when they have the same vertex count and the same
    /// weighted edges, regardless of storage order.
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.edge_count() == other.edge_count()
            && self
                .matrix
                .iter()
                .all(|(u, v, weight)| other.matrix.get(u, v) == Some(&weight))
    }
}

impl<M> Debug for WeightedGraph<M>
where
    M: AdjacencyMatrix,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("vertex_count", &self.vertex_count())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}
