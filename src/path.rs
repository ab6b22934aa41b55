/// A lowest-weight path through a graph, as the sequence of vertices it
/// visits from source to target, together with its total weight.
///
/// A path always contains at least one vertex; the trivial path from a vertex
/// to itself is `[v]` with weight zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath {
    vertices: Vec<usize>,
    total_weight: f64,
}

impl ShortestPath {
    /// Creates a path.  Panics if `vertices` is empty.
    pub(crate) fn new(vertices: Vec<usize>, total_weight: f64) -> Self {
        assert!(!vertices.is_empty(), "Path has no vertices");
        Self {
            vertices,
            total_weight,
        }
    }

    /// Returns the vertices of the path, starting at the source.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Returns the first vertex of the path.
    pub fn source(&self) -> usize {
        self.vertices[0]
    }

    /// Returns the last vertex of the path.
    pub fn target(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    /// Returns the sum of the weights of the edges along the path.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns the number of edges in the path.
    pub fn len(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Returns `true` for the trivial path from a vertex to itself.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the consecutive vertex pairs, i.e. the edges walked.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn into_vertices(self) -> Vec<usize> {
        self.vertices
    }
}

impl PartialEq<[usize]> for ShortestPath {
    fn eq(&self, other: &[usize]) -> bool {
        self.vertices == other
    }
}

impl PartialEq<&[usize]> for ShortestPath {
    fn eq(&self, other: &&[usize]) -> bool {
        self.vertices == *other
    }
}

impl PartialEq<Vec<usize>> for ShortestPath {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.vertices == other
    }
}

impl<const N: usize> PartialEq<[usize; N]> for ShortestPath {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.vertices == other
    }
}

impl From<ShortestPath> for Vec<usize> {
    fn from(path: ShortestPath) -> Self {
        path.into_vertices()
    }
}
