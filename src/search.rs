use std::{collections::VecDeque, iter::FusedIterator};

use bitvec::vec::BitVec;
use derivative::Derivative;

use crate::{Graph, vertex_ref::VertexRef};

/// The container of vertices waiting to be expanded during a traversal.
pub trait Frontier: Default {
    /// Takes the next candidate, which may already have been visited.
    fn pop_next(&mut self) -> Option<usize>;

    /// Adds the successors of the vertex being expanded, given in ascending
    /// index order.
    fn push_successors(&mut self, successors: impl DoubleEndedIterator<Item = usize>);
}

/// First in, first out: breadth-first order.
impl Frontier for VecDeque<usize> {
    fn pop_next(&mut self) -> Option<usize> {
        self.pop_front()
    }

    fn push_successors(&mut self, successors: impl DoubleEndedIterator<Item = usize>) {
        self.extend(successors);
    }
}

/// Last in, first out: depth-first order. Successors are pushed in
/// descending order so the smallest index is expanded first.
impl Frontier for Vec<usize> {
    fn pop_next(&mut self) -> Option<usize> {
        self.pop()
    }

    fn push_successors(&mut self, successors: impl DoubleEndedIterator<Item = usize>) {
        self.extend(successors.rev());
    }
}

/// A single-pass traversal over the vertices reachable from a start vertex.
///
/// The current position is a vertex index; the end position is the vertex
/// count at construction. Visited state is checked when a candidate is
/// popped, so the frontier may hold duplicates.
#[derive(Derivative)]
#[derivative(Clone(bound = "F: Clone"), Debug(bound = "F: std::fmt::Debug"))]
pub struct TraversalIterator<'g, V, E, F> {
    #[derivative(Debug = "ignore")]
    graph: &'g Graph<V, E>,
    current: usize,
    frontier: F,
    visited: BitVec,
}

/// Breadth-first traversal.
pub type BfsIterator<'g, V, E> = TraversalIterator<'g, V, E, VecDeque<usize>>;

/// Depth-first traversal.
pub type DfsIterator<'g, V, E> = TraversalIterator<'g, V, E, Vec<usize>>;

impl<'g, V, E, F> TraversalIterator<'g, V, E, F>
where
    F: Frontier,
{
    /// Starts a traversal at `start`. A start outside the graph gives an
    /// iterator that is already at the end.
    pub fn new(graph: &'g Graph<V, E>, start: usize) -> Self {
        let mut traversal = Self::end(graph);
        if start < graph.nr_of_vertices() {
            traversal.frontier = F::default();
            traversal.visited = BitVec::repeat(false, graph.nr_of_vertices());
            traversal.frontier.push_successors(std::iter::once(start));
            traversal.step();
        }
        traversal
    }

    pub(crate) fn end(graph: &'g Graph<V, E>) -> Self {
        Self {
            graph,
            current: graph.nr_of_vertices(),
            frontier: F::default(),
            visited: BitVec::new(),
        }
    }

    /// Gets the index of the current vertex, or the vertex count at the end.
    pub fn id(&self) -> usize {
        self.current
    }

    pub fn is_end(&self) -> bool {
        self.current == self.graph.nr_of_vertices()
    }

    /// Gets the current vertex, or `None` at the end.
    pub fn get(&self) -> Option<VertexRef<'g, V>> {
        self.graph
            .vertex_data(self.current)
            .map(|data| VertexRef::new(self.current, data))
    }

    /// Moves to the next unvisited vertex. Does nothing at the end.
    pub fn advance(&mut self) -> &mut Self {
        if !self.is_end() {
            self.step();
        }
        self
    }

    fn step(&mut self) {
        let next = loop {
            match self.frontier.pop_next() {
                Some(vertex) if self.visited[vertex] => continue,
                Some(vertex) => break vertex,
                None => {
                    self.current = self.graph.nr_of_vertices();
                    return;
                }
            }
        };
        self.visited.set(next, true);
        let visited = &self.visited;
        self.frontier.push_successors(
            self.graph
                .successors(next)
                .filter(|&successor| !visited[successor]),
        );
        self.current = next;
    }
}

impl<V, E, F> PartialEq for TraversalIterator<'_, V, E, F> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<'g, V, E, F> Iterator for TraversalIterator<'g, V, E, F>
where
    F: Frontier,
{
    type Item = VertexRef<'g, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.get()?;
        self.advance();
        Some(item)
    }
}

impl<V, E, F> FusedIterator for TraversalIterator<'_, V, E, F> where F: Frontier {}
