//! A directed graph with vertex payloads and edge labels, stored as a dense
//! adjacency matrix.
//!
//! [`Graph`] supports structural mutation, four kinds of traversal (index
//! order, edge order, breadth-first and depth-first), and shortest-path
//! search with Dijkstra's algorithm or A*.
//!
//! ```
//! use matrix_graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.insert_vertex("a");
//! let b = graph.insert_vertex("b");
//! let c = graph.insert_vertex("c");
//! graph.add_edge(a, b, 2)?;
//! graph.add_edge(b, c, 3)?;
//! graph.add_edge(a, c, 9)?;
//!
//! let path = graph.dijkstra(a, c, |&cost| cost as f64)?;
//! assert_eq!(path.vertices(), &[a, b, c]);
//! assert_eq!(path.cost(), 5.0);
//! # Ok::<(), matrix_graph::GraphError>(())
//! ```

pub mod dump;
pub mod edge_ref;
pub mod error;
pub mod graph;
pub mod graph_id;
pub mod handle;
pub mod iter;
pub mod path;
pub mod search;
pub mod shortest_path;
pub mod tracing_support;
pub mod vertex_ref;

#[cfg(test)]
mod graph_test_support;

pub use edge_ref::EdgeRef;
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use handle::{EdgeHandle, VertexHandle};
pub use iter::{EdgesIterator, VerticesIterator};
pub use path::Path;
pub use search::{BfsIterator, DfsIterator};
pub use vertex_ref::VertexRef;
