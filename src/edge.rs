use std::fmt;

use crate::{error::InvalidEdgeReason, util::is_valid_weight, util::sort_pair};

/// An undirected, weighted edge between vertices `u` and `v`.
///
/// Edges are plain values; nothing is checked until the edge is handed to a
/// graph.  `(u, v, w)` and `(v, u, w)` describe the same edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Returns the endpoints with the smaller vertex first.
    pub fn endpoints(&self) -> (usize, usize) {
        sort_pair(self.u, self.v)
    }

    /// Returns the larger endpoint.
    pub fn max_vertex(&self) -> usize {
        self.u.max(self.v)
    }

    /// Checks the edge against the insertion rules.  Self-loops are rejected
    /// first, then weights that are not finite and positive, then endpoints
    /// outside `0..vertex_count` when a vertex count is given.
    pub fn validate(&self, vertex_count: Option<usize>) -> Result<(), InvalidEdgeReason> {
        if self.u == self.v {
            return Err(InvalidEdgeReason::SelfLoop { vertex: self.u });
        }
        if !is_valid_weight(self.weight) {
            return Err(InvalidEdgeReason::NonPositiveWeight {
                weight: self.weight,
            });
        }
        if let Some(vertex_count) = vertex_count {
            if let Some(vertex) = [self.u, self.v].into_iter().find(|&x| x >= vertex_count) {
                return Err(InvalidEdgeReason::OutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

impl From<(usize, usize, f64)> for Edge {
    fn from((u, v, weight): (usize, usize, f64)) -> Self {
        Self::new(u, v, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.u, self.v, self.weight)
    }
}
