/// Errors reported by graph operations that cannot be expressed as a plain
/// success flag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex index outside `0..len`.
    #[error("vertex index {index} out of range for a graph with {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
    /// The edge label of a missing edge was requested.
    #[error("no edge from vertex {from} to vertex {into}")]
    MissingEdge { from: usize, into: usize },
    /// A search exhausted its frontier without reaching the target.
    #[error("no path from vertex {start} to vertex {end}")]
    NoPath { start: usize, end: usize },
    /// The handle was issued before a vertex removal shifted the indices.
    #[error("handle was issued before the last vertex removal")]
    StaleHandle,
    /// The handle was issued by another graph.
    #[error("handle belongs to a different graph")]
    ForeignHandle,
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
