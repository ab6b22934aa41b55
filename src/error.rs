use thiserror::Error;

use crate::edge::Edge;

/// Errors returned by fallible [`WeightedGraph`](crate::WeightedGraph)
/// operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GraphError {
    /// An insertion was rejected.  Nothing was written for this edge.
    #[error("invalid edge {edge}: {reason}")]
    InvalidEdge {
        edge: Edge,
        reason: InvalidEdgeReason,
    },

    /// A checked lookup found no edge, or one of the vertices does not exist.
    #[error("no edge between vertices {u} and {v}")]
    NoSuchEdge { u: usize, v: usize },
}

/// Why an edge failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InvalidEdgeReason {
    #[error("both endpoints are vertex {vertex}")]
    SelfLoop { vertex: usize },

    #[error("weight {weight} is not a finite positive number")]
    NonPositiveWeight { weight: f64 },

    #[error("vertex {vertex} is outside 0..{vertex_count}")]
    OutOfRange { vertex: usize, vertex_count: usize },
}

impl GraphError {
    pub(crate) fn invalid_edge(edge: Edge, reason: InvalidEdgeReason) -> Self {
        GraphError::InvalidEdge { edge, reason }
    }

    /// Returns the rejection reason if this is an [`GraphError::InvalidEdge`].
    pub fn invalid_edge_reason(&self) -> Option<InvalidEdgeReason> {
        match self {
            GraphError::InvalidEdge { reason, .. } => Some(*reason),
            GraphError::NoSuchEdge { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GraphError::invalid_edge(
            Edge::new(2, 2, 1.5),
            InvalidEdgeReason::SelfLoop { vertex: 2 },
        );
        assert_eq!(err.to_string(), "invalid edge (2, 2, 1.5): both endpoints are vertex 2");

        let err = GraphError::invalid_edge(
            Edge::new(0, 9, 1.0),
            InvalidEdgeReason::OutOfRange {
                vertex: 9,
                vertex_count: 5,
            },
        );
        assert_eq!(err.to_string(), "invalid edge (0, 9, 1): vertex 9 is outside 0..5");

        let err = GraphError::NoSuchEdge { u: 5, v: 4 };
        assert_eq!(err.to_string(), "no edge between vertices 5 and 4");
    }

    #[test]
    fn test_invalid_edge_reason() {
        let err = GraphError::invalid_edge(
            Edge::new(0, 1, -1.0),
            InvalidEdgeReason::NonPositiveWeight { weight: -1.0 },
        );
        assert_eq!(
            err.invalid_edge_reason(),
            Some(InvalidEdgeReason::NonPositiveWeight { weight: -1.0 })
        );
        assert_eq!(GraphError::NoSuchEdge { u: 0, v: 1 }.invalid_edge_reason(), None);
    }
}
