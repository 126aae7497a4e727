//! Cursors over the vertices and edges of a [`Graph`].
//!
//! Each cursor can be compared against the matching end cursor and advanced
//! by hand, or used as an ordinary [`Iterator`] that yields the element under
//! the cursor and then advances.

use std::iter::FusedIterator;

use derivative::Derivative;

use crate::{Graph, edge_ref::EdgeRef, vertex_ref::VertexRef};

/// A cursor over vertices in ascending index order. The end cursor sits at
/// index `nr_of_vertices()`.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Copy(bound = ""), Debug(bound = ""))]
pub struct VerticesIterator<'g, V, E> {
    #[derivative(Debug = "ignore")]
    graph: &'g Graph<V, E>,
    index: usize,
}

impl<'g, V, E> VerticesIterator<'g, V, E> {
    /// Positions the cursor at `index`, clamped to the end position.
    pub(crate) fn new(graph: &'g Graph<V, E>, index: usize) -> Self {
        Self {
            graph,
            index: index.min(graph.nr_of_vertices()),
        }
    }

    /// Gets the index of the current vertex.
    pub fn id(&self) -> usize {
        self.index
    }

    pub fn is_end(&self) -> bool {
        self.index == self.graph.nr_of_vertices()
    }

    /// Gets the current vertex, or `None` at the end.
    pub fn get(&self) -> Option<VertexRef<'g, V>> {
        self.graph
            .vertex_data(self.index)
            .map(|data| VertexRef::new(self.index, data))
    }

    /// Moves to the next vertex. Does nothing at the end.
    pub fn advance(&mut self) -> &mut Self {
        if !self.is_end() {
            self.index += 1;
        }
        self
    }
}

impl<V, E> PartialEq for VerticesIterator<'_, V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<V, E> Eq for VerticesIterator<'_, V, E> {}

impl<'g, V, E> Iterator for VerticesIterator<'g, V, E> {
    type Item = VertexRef<'g, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.get()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.nr_of_vertices() - self.index;
        (remaining, Some(remaining))
    }
}

impl<V, E> ExactSizeIterator for VerticesIterator<'_, V, E> {}

impl<V, E> FusedIterator for VerticesIterator<'_, V, E> {}

/// A cursor over the present cells of the adjacency matrix in row-major
/// order. The end cursor has `row == nr_of_vertices()`.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Copy(bound = ""), Debug(bound = ""))]
pub struct EdgesIterator<'g, V, E> {
    #[derivative(Debug = "ignore")]
    graph: &'g Graph<V, E>,
    row: usize,
    column: usize,
}

impl<'g, V, E> EdgesIterator<'g, V, E> {
    /// Positions the cursor at `(row, column)`. An absent cell moves the
    /// cursor forward to the next present one; coordinates outside the
    /// matrix give the end cursor.
    pub(crate) fn new(graph: &'g Graph<V, E>, row: usize, column: usize) -> Self {
        let count = graph.nr_of_vertices();
        if row >= count || column >= count {
            return Self::end(graph);
        }
        let mut cursor = Self { graph, row, column };
        if !graph.edge_exists(row, column) {
            cursor.advance();
        }
        cursor
    }

    pub(crate) fn end(graph: &'g Graph<V, E>) -> Self {
        Self {
            graph,
            row: graph.nr_of_vertices(),
            column: 0,
        }
    }

    /// Gets the source index of the current edge.
    pub fn v1id(&self) -> usize {
        self.row
    }

    /// Gets the destination index of the current edge.
    pub fn v2id(&self) -> usize {
        self.column
    }

    pub fn is_end(&self) -> bool {
        self.row == self.graph.nr_of_vertices()
    }

    /// Gets the current edge, or `None` at the end.
    pub fn get(&self) -> Option<EdgeRef<'g, E>> {
        self.graph
            .label(self.row, self.column)
            .map(|label| EdgeRef::new(self.row, self.column, label))
    }

    /// Moves to the next present cell, column first, then row. Does nothing
    /// at the end.
    pub fn advance(&mut self) -> &mut Self {
        let count = self.graph.nr_of_vertices();
        if self.row == count {
            return self;
        }
        loop {
            self.column += 1;
            if self.column >= count {
                self.row += 1;
                self.column = 0;
                if self.row == count {
                    return self;
                }
            }
            if self.graph.edge_exists(self.row, self.column) {
                return self;
            }
        }
    }
}

impl<V, E> PartialEq for EdgesIterator<'_, V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && (self.is_end() || self.column == other.column)
    }
}

impl<V, E> Eq for EdgesIterator<'_, V, E> {}

impl<'g, V, E> Iterator for EdgesIterator<'g, V, E> {
    type Item = EdgeRef<'g, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.get()?;
        self.advance();
        Some(item)
    }
}

impl<V, E> FusedIterator for EdgesIterator<'_, V, E> {}
