/// The result of a shortest-path search: the vertices from start to end
/// inclusive and the total cost of the edges between them.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    cost: f64,
    vertices: Vec<usize>,
    settled: usize,
}

impl Path {
    /// `vertices` must hold at least the start vertex.
    pub(crate) fn new(cost: f64, vertices: Vec<usize>, settled: usize) -> Self {
        debug_assert!(!vertices.is_empty());
        Self {
            cost,
            vertices,
            settled,
        }
    }

    /// Returns the sum of the edge costs along the path.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns the vertex indices in order, start and end included.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Returns the first vertex in the path.
    pub fn first(&self) -> usize {
        self.vertices[0]
    }

    /// Returns the last vertex in the path.
    pub fn last(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    /// Returns the number of vertices in the path, which is never zero.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the `(from, into)` pairs of the edges along the path.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Returns how many vertices the search settled before it reached the
    /// end vertex.
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    pub fn into_parts(self) -> (f64, Vec<usize>) {
        (self.cost, self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_vertex_path() {
        let path = Path::new(0.0, vec![4], 0);
        assert_eq!(path.first(), 4);
        assert_eq!(path.last(), 4);
        assert_eq!(path.vertex_count(), 1);
        assert_eq!(path.edges().count(), 0);
    }

    #[test]
    fn test_edges() {
        let path = Path::new(5.0, vec![0, 1, 2], 2);
        assert_eq!(path.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
        assert_eq!(path.into_parts(), (5.0, vec![0, 1, 2]));
    }
}
