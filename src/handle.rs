use derivative::Derivative;

use crate::graph_id::GraphId;

/// A reference to a vertex that stays checkable across mutation.
///
/// Vertex indices shift down when a vertex below them is removed, so a bare
/// `usize` kept across a removal silently names a different vertex. A handle
/// also records the graph that issued it and that graph's generation at the
/// time; [`Graph::resolve_vertex`](crate::Graph::resolve_vertex) turns it
/// back into an index or reports it as stale.
#[derive(Derivative)]
#[derivative(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct VertexHandle {
    index: usize,
    #[derivative(Hash = "ignore", Debug = "ignore")]
    pub(crate) generation: usize,
    #[derivative(Hash = "ignore", Debug = "ignore")]
    pub(crate) graph_id: GraphId,
}

impl VertexHandle {
    pub(crate) fn new(index: usize, graph_id: GraphId, generation: usize) -> Self {
        Self {
            index,
            generation,
            graph_id,
        }
    }

    /// The index the vertex had when the handle was issued.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A reference to the edge between two vertices, checked the same way as a
/// [`VertexHandle`].
#[derive(Derivative)]
#[derivative(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EdgeHandle {
    from: usize,
    into: usize,
    #[derivative(Hash = "ignore", Debug = "ignore")]
    pub(crate) generation: usize,
    #[derivative(Hash = "ignore", Debug = "ignore")]
    pub(crate) graph_id: GraphId,
}

impl EdgeHandle {
    pub(crate) fn new(from: usize, into: usize, graph_id: GraphId, generation: usize) -> Self {
        Self {
            from,
            into,
            generation,
            graph_id,
        }
    }

    /// The source index the edge had when the handle was issued.
    pub fn from(&self) -> usize {
        self.from
    }

    /// The destination index the edge had when the handle was issued.
    pub fn into(&self) -> usize {
        self.into
    }

    pub fn ends(&self) -> (usize, usize) {
        (self.from, self.into)
    }
}
