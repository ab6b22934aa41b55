use quickcheck::{Arbitrary, Gen};

use crate::{adjacency_matrix::AdjacencyMatrix, edge::Edge, graph::WeightedGraph};

/// Largest vertex count of generated graphs.
const MAX_VERTICES: usize = 12;

/// Generates an integral weight in `1..=20`, so path costs can be compared
/// exactly against integer reference implementations.
fn arbitrary_weight(g: &mut Gen) -> f64 {
    f64::from(u8::arbitrary(g) % 20 + 1)
}

/// A valid edge between two distinct vertices below 16.
#[derive(Clone, Debug)]
pub struct ArbEdge(pub Edge);

impl Arbitrary for ArbEdge {
    fn arbitrary(g: &mut Gen) -> Self {
        let u = usize::arbitrary(g) % 16;
        let v = (u + 1 + usize::arbitrary(g) % 15) % 16;
        ArbEdge(Edge::new(u, v, arbitrary_weight(g)))
    }
}

/// A random graph with up to [`MAX_VERTICES`] vertices and integral weights.
#[derive(Clone, Debug)]
pub struct ArbGraph<M: AdjacencyMatrix> {
    pub graph: WeightedGraph<M>,
}

impl<M> Arbitrary for ArbGraph<M>
where
    M: AdjacencyMatrix + Clone + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let vertex_count = usize::arbitrary(g) % (MAX_VERTICES + 1);
        let num_edges = usize::arbitrary(g) % 30;
        let mut graph = WeightedGraph::<M>::with_vertex_count(vertex_count);
        if vertex_count >= 2 {
            for _ in 0..num_edges {
                let u = usize::arbitrary(g) % vertex_count;
                let v = usize::arbitrary(g) % vertex_count;
                if u != v {
                    graph
                        .add_edge((u, v, arbitrary_weight(g)))
                        .expect("generated edge is valid");
                }
            }
        }
        ArbGraph { graph }
    }
}

/// Checks that consecutive vertices of `vertices` are joined by edges and
/// returns the summed weight, or `None` if some step has no edge.
pub fn walk_weight<M: AdjacencyMatrix>(graph: &WeightedGraph<M>, vertices: &[usize]) -> Option<f64> {
    vertices
        .windows(2)
        .map(|pair| graph.weight(pair[0], pair[1]).ok())
        .sum()
}
