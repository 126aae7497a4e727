use std::ops::{Index, IndexMut};

use derivative::Derivative;

use crate::{
    dump::MatrixDump,
    error::{GraphError, Result},
    graph_id::GraphId,
    handle::{EdgeHandle, VertexHandle},
    iter::{EdgesIterator, VerticesIterator},
    path::Path,
    search::{BfsIterator, DfsIterator},
    shortest_path,
    tracing_support::trace,
    vertex_ref::VertexRef,
};

/// One vertex slot: the payload and the row of outgoing edge labels, one cell
/// per possible destination.
#[derive(Clone, Debug)]
struct Row<V, E> {
    data: V,
    edges: Vec<Option<E>>,
}

/// A directed graph with vertex payloads `V` and edge labels `E`, stored as a
/// dense adjacency matrix.
///
/// Vertices are addressed by dense indices in `0..nr_of_vertices()`. Removing
/// a vertex shifts every higher index down by one; use a [`VertexHandle`] or
/// [`EdgeHandle`] to keep a reference that detects this. At most one edge
/// exists per ordered pair of vertices, and self-loops are allowed.
///
/// Every iterator borrows the graph immutably, so the graph cannot be mutated
/// while a traversal is in progress.
#[derive(Derivative)]
#[derivative(Debug(bound = "V: std::fmt::Debug, E: std::fmt::Debug"))]
pub struct Graph<V, E> {
    rows: Vec<Row<V, E>>,
    #[derivative(Debug = "ignore")]
    id: GraphId,
    #[derivative(Debug = "ignore")]
    generation: usize,
}

impl<V, E> Graph<V, E> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            id: GraphId::new(),
            generation: 0,
        }
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Gets the number of vertices. O(1).
    pub fn nr_of_vertices(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Gets the number of edges by counting the present cells. O(n²).
    pub fn nr_of_edges(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.edges.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    /// Returns `Ok(())` if `index` names a vertex.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }

    // Vertices

    /// Appends a vertex with the given payload and returns its index. Every
    /// existing row gains one absent cell. O(n).
    pub fn insert_vertex(&mut self, data: V) -> usize {
        for row in &mut self.rows {
            row.edges.push(None);
        }
        let index = self.rows.len();
        let mut edges = Vec::with_capacity(index + 1);
        edges.resize_with(index + 1, || None);
        self.rows.push(Row { data, edges });
        trace!(vertex = index, "inserted vertex");
        index
    }

    /// Removes a vertex together with every edge into or out of it. Every
    /// vertex above `index` moves down by one. Returns `false` if `index` is
    /// out of range. O(n²).
    pub fn remove_vertex(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        for row in &mut self.rows {
            row.edges.remove(index);
        }
        self.generation = self.generation.wrapping_add(1);
        trace!(vertex = index, "removed vertex");
        true
    }

    /// Removes a vertex by moving the last vertex into its slot. Only the
    /// last vertex changes index. Returns `false` if `index` is out of range.
    /// O(n).
    pub fn swap_remove_vertex(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        self.rows.swap_remove(index);
        for row in &mut self.rows {
            row.edges.swap_remove(index);
        }
        self.generation = self.generation.wrapping_add(1);
        trace!(vertex = index, "swap-removed vertex");
        true
    }

    /// Gets the payload of a vertex, or `None` if `index` is out of range.
    pub fn vertex_data(&self, index: usize) -> Option<&V> {
        self.rows.get(index).map(|row| &row.data)
    }

    /// Gets the payload of a vertex mutably, or `None` if `index` is out of
    /// range.
    pub fn vertex_data_mut(&mut self, index: usize) -> Option<&mut V> {
        self.rows.get_mut(index).map(|row| &mut row.data)
    }

    // Edges

    /// Stores `label` on the edge `from -> into`.
    ///
    /// If the edge already exists and `replace` is false, the graph is left
    /// unchanged and the returned flag is `false`; otherwise the label is
    /// stored and the flag is `true`. The handle names the edge either way.
    pub fn insert_edge(
        &mut self,
        from: usize,
        into: usize,
        label: E,
        replace: bool,
    ) -> Result<(EdgeHandle, bool)> {
        self.check_index(from)?;
        self.check_index(into)?;
        let handle = EdgeHandle::new(from, into, self.id, self.generation);
        let cell = &mut self.rows[from].edges[into];
        if cell.is_some() && !replace {
            return Ok((handle, false));
        }
        *cell = Some(label);
        trace!(from, into, "inserted edge");
        Ok((handle, true))
    }

    /// Stores `label` on the edge `from -> into`, replacing any existing label.
    pub fn add_edge(&mut self, from: usize, into: usize, label: E) -> Result<EdgeHandle> {
        self.insert_edge(from, into, label, true)
            .map(|(handle, _)| handle)
    }

    /// Like [`Self::insert_edge`] with a default label.
    pub fn insert_default_edge(
        &mut self,
        from: usize,
        into: usize,
        replace: bool,
    ) -> Result<(EdgeHandle, bool)>
    where
        E: Default,
    {
        self.insert_edge(from, into, E::default(), replace)
    }

    /// Clears the edge `from -> into`. Returns `false` if there was no such
    /// edge or either index is out of range.
    pub fn remove_edge(&mut self, from: usize, into: usize) -> bool {
        let Some(cell) = self.cell_mut(from, into) else {
            return false;
        };
        if cell.take().is_none() {
            return false;
        }
        trace!(from, into, "removed edge");
        true
    }

    /// Checks if the edge `from -> into` exists. Out-of-range indices have no
    /// edges. O(1).
    pub fn edge_exists(&self, from: usize, into: usize) -> bool {
        self.label(from, into).is_some()
    }

    /// Gets the label of the edge `from -> into`.
    pub fn edge_label(&self, from: usize, into: usize) -> Result<&E> {
        self.label(from, into)
            .ok_or(GraphError::MissingEdge { from, into })
    }

    /// Gets the label of the edge `from -> into` mutably.
    pub fn edge_label_mut(&mut self, from: usize, into: usize) -> Result<&mut E> {
        self.cell_mut(from, into)
            .and_then(Option::as_mut)
            .ok_or(GraphError::MissingEdge { from, into })
    }

    /// Iterates over the outgoing edges of `from` in ascending destination
    /// order. Empty if `from` is out of range.
    pub fn edges_from(&self, from: usize) -> impl DoubleEndedIterator<Item = (usize, &E)> + '_ {
        self.rows
            .get(from)
            .map(|row| row.edges.as_slice())
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter_map(|(into, cell)| cell.as_ref().map(|label| (into, label)))
    }

    /// Iterates over the destinations of the outgoing edges of `from` in
    /// ascending order.
    pub fn successors(&self, from: usize) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.edges_from(from).map(|(into, _)| into)
    }

    pub(crate) fn label(&self, from: usize, into: usize) -> Option<&E> {
        self.rows
            .get(from)
            .and_then(|row| row.edges.get(into))
            .and_then(Option::as_ref)
    }

    #[cfg(test)]
    pub(crate) fn row_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().map(|row| row.edges.len())
    }

    fn cell_mut(&mut self, from: usize, into: usize) -> Option<&mut Option<E>> {
        self.rows
            .get_mut(from)
            .and_then(|row| row.edges.get_mut(into))
    }

    // Handles

    /// Issues a handle for the vertex at `index`.
    pub fn vertex_handle(&self, index: usize) -> Result<VertexHandle> {
        self.check_index(index)?;
        Ok(VertexHandle::new(index, self.id, self.generation))
    }

    /// Issues a handle for the edge `from -> into`.
    pub fn edge_handle(&self, from: usize, into: usize) -> Result<EdgeHandle> {
        self.edge_label(from, into)?;
        Ok(EdgeHandle::new(from, into, self.id, self.generation))
    }

    /// Turns a handle back into the vertex's current index.
    pub fn resolve_vertex(&self, handle: &VertexHandle) -> Result<usize> {
        self.maybe_check_issuer(handle.graph_id, handle.generation)?;
        self.check_index(handle.index())?;
        Ok(handle.index())
    }

    /// Turns a handle back into the edge's current endpoints.
    pub fn resolve_edge(&self, handle: &EdgeHandle) -> Result<(usize, usize)> {
        self.maybe_check_issuer(handle.graph_id, handle.generation)?;
        let (from, into) = handle.ends();
        self.check_index(from)?;
        self.check_index(into)?;
        self.edge_label(from, into)?;
        Ok((from, into))
    }

    fn maybe_check_issuer(&self, graph_id: GraphId, generation: usize) -> Result<()> {
        #[cfg(not(feature = "unchecked"))]
        {
            if self.id != graph_id {
                return Err(GraphError::ForeignHandle);
            }
            if self.generation != generation {
                return Err(GraphError::StaleHandle);
            }
        }
        #[cfg(feature = "unchecked")]
        {
            let _ = (graph_id, generation);
        }
        Ok(())
    }

    // Iteration

    /// Returns a cursor on the first vertex.
    pub fn begin_vertices(&self) -> VerticesIterator<'_, V, E> {
        VerticesIterator::new(self, 0)
    }

    /// Returns the past-the-end vertex cursor.
    pub fn end_vertices(&self) -> VerticesIterator<'_, V, E> {
        VerticesIterator::new(self, self.rows.len())
    }

    /// Iterates over all vertices in index order.
    pub fn vertices(&self) -> VerticesIterator<'_, V, E> {
        self.begin_vertices()
    }

    /// Returns a cursor on the vertex at `index`, or the end cursor if there
    /// is none.
    pub fn vertex(&self, index: usize) -> VerticesIterator<'_, V, E> {
        VerticesIterator::new(self, index)
    }

    /// Returns a cursor on the first edge in row-major order.
    pub fn begin_edges(&self) -> EdgesIterator<'_, V, E> {
        EdgesIterator::new(self, 0, 0)
    }

    /// Returns the past-the-end edge cursor.
    pub fn end_edges(&self) -> EdgesIterator<'_, V, E> {
        EdgesIterator::end(self)
    }

    /// Iterates over all edges in row-major order.
    pub fn edges(&self) -> EdgesIterator<'_, V, E> {
        self.begin_edges()
    }

    /// Returns a cursor on the edge `from -> into`, or the end cursor if
    /// there is none.
    pub fn edge(&self, from: usize, into: usize) -> EdgesIterator<'_, V, E> {
        if self.edge_exists(from, into) {
            EdgesIterator::new(self, from, into)
        } else {
            EdgesIterator::end(self)
        }
    }

    /// Starts a breadth-first traversal at `start`.
    pub fn begin_bfs(&self, start: usize) -> BfsIterator<'_, V, E> {
        BfsIterator::new(self, start)
    }

    pub fn end_bfs(&self) -> BfsIterator<'_, V, E> {
        BfsIterator::end(self)
    }

    /// Starts a depth-first traversal at `start`.
    pub fn begin_dfs(&self, start: usize) -> DfsIterator<'_, V, E> {
        DfsIterator::new(self, start)
    }

    pub fn end_dfs(&self) -> DfsIterator<'_, V, E> {
        DfsIterator::end(self)
    }

    // Pathfinding

    /// Finds a cheapest path from `start` to `end` with Dijkstra's algorithm.
    /// `cost_fn` maps an edge label to its cost, which must not be negative.
    pub fn dijkstra(&self, start: usize, end: usize, cost_fn: impl Fn(&E) -> f64) -> Result<Path> {
        shortest_path::search(self, start, end, cost_fn, |_, _, _| 0.0)
    }

    /// Finds a cheapest path from `start` to `end` with A*. The heuristic
    /// estimates the remaining cost from a vertex to `end`; the result is
    /// optimal only if it never overestimates.
    pub fn a_star(
        &self,
        start: usize,
        end: usize,
        cost_fn: impl Fn(&E) -> f64,
        heuristic: impl Fn(&Self, usize, usize) -> f64,
    ) -> Result<Path> {
        shortest_path::search(self, start, end, cost_fn, heuristic)
    }

    // Diagnostics

    /// Returns a displayable dump of the adjacency matrix.
    pub fn matrix_dump(&self) -> MatrixDump<'_, V, E> {
        MatrixDump::new(self)
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, E: Clone> Clone for Graph<V, E> {
    /// The clone is a separate graph: handles issued by `self` are foreign
    /// to it.
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            id: GraphId::new(),
            generation: 0,
        }
    }
}

impl<V, E> Index<usize> for Graph<V, E> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        &self.rows[index].data
    }
}

impl<V, E> IndexMut<usize> for Graph<V, E> {
    fn index_mut(&mut self, index: usize) -> &mut V {
        &mut self.rows[index].data
    }
}

impl<'g, V, E> IntoIterator for &'g Graph<V, E> {
    type Item = VertexRef<'g, V>;
    type IntoIter = VerticesIterator<'g, V, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_test_support::create_sample_graph;

    fn assert_square<V, E>(graph: &Graph<V, E>) {
        for row in &graph.rows {
            assert_eq!(row.edges.len(), graph.nr_of_vertices());
        }
    }

    #[test]
    fn test_insert_vertex_grows_every_row() {
        let mut graph = create_sample_graph();
        let index = graph.insert_vertex("V5");
        assert_eq!(index, 4);
        assert_eq!(graph.nr_of_vertices(), 5);
        assert_square(&graph);
        assert!((0..5).all(|from| !graph.edge_exists(from, 4)));
        assert_eq!(graph.nr_of_edges(), 6);
    }

    #[test]
    fn test_remove_vertex_shifts_indices() {
        let mut graph = create_sample_graph();
        assert!(graph.remove_vertex(2));
        assert_eq!(graph.nr_of_vertices(), 3);
        assert_square(&graph);
        assert_eq!(graph[2], "V4");
        assert!(graph.edge_exists(0, 1));
        assert!(graph.edge_exists(2, 0));
        assert!(graph.edge_exists(0, 2));
        assert!(graph.edge_exists(1, 2));
        assert_eq!(graph.nr_of_edges(), 4);
    }

    #[test]
    fn test_remove_vertex_out_of_range() {
        let mut graph = create_sample_graph();
        assert!(!graph.remove_vertex(4));
        assert_eq!(graph.nr_of_vertices(), 4);
    }

    #[test]
    fn test_swap_remove_vertex_moves_last() {
        let mut graph = create_sample_graph();
        graph.add_edge(3, 3, 9).unwrap();
        assert!(graph.swap_remove_vertex(1));
        assert_square(&graph);
        assert_eq!(graph[1], "V4");
        assert_eq!(graph.edge_label(1, 1), Ok(&9));
        assert_eq!(graph.edge_label(1, 2), Ok(&5));
        assert_eq!(graph.edge_label(1, 0), Ok(&6));
        assert_eq!(graph.edge_label(0, 1), Ok(&7));
        assert_eq!(graph.nr_of_edges(), 4);
    }

    #[test]
    fn test_insert_edge_without_replace() {
        let mut graph = create_sample_graph();
        let (handle, inserted) = graph.insert_edge(0, 1, 42, false).unwrap();
        assert!(!inserted);
        assert_eq!(handle.ends(), (0, 1));
        assert_eq!(graph.edge_label(0, 1), Ok(&2));
    }

    #[test]
    fn test_insert_edge_with_replace() {
        let mut graph = create_sample_graph();
        let (_, inserted) = graph.insert_edge(0, 1, 42, true).unwrap();
        assert!(inserted);
        assert_eq!(graph.edge_label(0, 1), Ok(&42));
        assert_eq!(graph.nr_of_edges(), 6);
    }

    #[test]
    fn test_insert_edge_out_of_range() {
        let mut graph = create_sample_graph();
        assert_eq!(
            graph.insert_edge(0, 4, 1, true),
            Err(GraphError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_insert_default_edge() {
        let mut graph = create_sample_graph();
        let (_, inserted) = graph.insert_default_edge(2, 0, true).unwrap();
        assert!(inserted);
        assert_eq!(graph.edge_label(2, 0), Ok(&0));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = create_sample_graph();
        assert!(graph.remove_edge(0, 1));
        assert!(!graph.remove_edge(0, 1));
        assert!(!graph.remove_edge(1, 0));
        assert!(!graph.remove_edge(7, 0));
        assert!(!graph.remove_edge(0, 7));
        assert_eq!(graph.nr_of_vertices(), 4);
        assert_eq!(graph.nr_of_edges(), 5);
    }

    #[test]
    fn test_edge_label_missing() {
        let graph = create_sample_graph();
        assert_eq!(
            graph.edge_label(1, 0),
            Err(GraphError::MissingEdge { from: 1, into: 0 })
        );
        assert!(!graph.edge_exists(9, 9));
    }

    #[test]
    fn test_edge_label_mut() {
        let mut graph = create_sample_graph();
        *graph.edge_label_mut(1, 2).unwrap() += 10;
        assert_eq!(graph.edge_label(1, 2), Ok(&13));
        assert!(graph.edge_label_mut(2, 1).is_err());
    }

    #[test]
    fn test_vertex_data() {
        let mut graph = create_sample_graph();
        assert_eq!(graph.vertex_data(3), Some(&"V4"));
        assert_eq!(graph.vertex_data(4), None);
        *graph.vertex_data_mut(0).unwrap() = "W1";
        graph[1] = "W2";
        assert_eq!(graph[0], "W1");
        assert_eq!(graph.vertex_data(1), Some(&"W2"));
    }

    #[test]
    fn test_for_loop_over_graph_visits_vertices() {
        let graph = create_sample_graph();
        let mut names = Vec::new();
        for vertex in &graph {
            names.push((vertex.id, *vertex.data));
        }
        assert_eq!(names, vec![(0, "V1"), (1, "V2"), (2, "V3"), (3, "V4")]);
    }

    #[test]
    fn test_edges_from_ascending() {
        let graph = create_sample_graph();
        let edges: Vec<_> = graph.edges_from(3).collect();
        assert_eq!(edges, vec![(0, &6), (2, &5)]);
        assert_eq!(graph.successors(0).rev().collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(graph.edges_from(10).count(), 0);
    }

    #[test]
    fn test_vertex_handle_goes_stale() {
        let mut graph = create_sample_graph();
        let handle = graph.vertex_handle(3).unwrap();
        assert_eq!(graph.resolve_vertex(&handle), Ok(3));
        graph.add_edge(2, 2, 1).unwrap();
        assert_eq!(graph.resolve_vertex(&handle), Ok(3));
        assert!(graph.remove_vertex(2));
        #[cfg(not(feature = "unchecked"))]
        assert_eq!(graph.resolve_vertex(&handle), Err(GraphError::StaleHandle));
    }

    #[test]
    fn test_edge_handle_resolution() {
        let mut graph = create_sample_graph();
        let (handle, _) = graph.insert_edge(2, 0, 11, true).unwrap();
        assert_eq!(graph.resolve_edge(&handle), Ok((2, 0)));
        assert!(graph.remove_edge(2, 0));
        assert_eq!(
            graph.resolve_edge(&handle),
            Err(GraphError::MissingEdge { from: 2, into: 0 })
        );
        assert!(graph.edge_handle(2, 0).is_err());
    }

    #[test]
    #[cfg(not(feature = "unchecked"))]
    fn test_handle_from_clone_is_foreign() {
        let graph = create_sample_graph();
        let copy = graph.clone();
        let handle = graph.vertex_handle(0).unwrap();
        assert_eq!(copy.resolve_vertex(&handle), Err(GraphError::ForeignHandle));
        assert_eq!(copy.nr_of_edges(), graph.nr_of_edges());
    }
}
