//! Undirected graphs with positive edge weights, stored in a symmetric
//! adjacency matrix, with Dijkstra shortest paths.

pub mod adjacency_matrix;
pub mod edge;
pub mod error;
pub mod graph;
pub mod path;
pub mod tracing_support;

mod dijkstra;
mod util;

#[cfg(test)]
mod test_support;

pub use adjacency_matrix::{AdjacencyMatrix, DenseAdjacencyMatrix, HashAdjacencyMatrix};
pub use edge::Edge;
pub use error::{GraphError, InvalidEdgeReason};
pub use graph::{SparseWeightedGraph, WeightedGraph};
pub use path::ShortestPath;
