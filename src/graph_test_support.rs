use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::Graph;

/// A small random graph with `u8` payloads and labels, self-loops included.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph<u8, u8>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 12;
        let num_edges = usize::arbitrary(g) % 40;

        let mut graph = Graph::with_capacity(num_vertices);
        for _ in 0..num_vertices {
            graph.insert_vertex(u8::arbitrary(g));
        }
        if num_vertices > 0 {
            for _ in 0..num_edges {
                let from = usize::arbitrary(g) % num_vertices;
                let into = usize::arbitrary(g) % num_vertices;
                graph.add_edge(from, into, u8::arbitrary(g)).unwrap();
            }
        }
        ArbGraph { graph }
    }
}

/// The four-vertex sample graph `V1..V4` with six labeled edges.
pub fn create_sample_graph() -> Graph<&'static str, i32> {
    let mut graph = Graph::new();
    for name in ["V1", "V2", "V3", "V4"] {
        graph.insert_vertex(name);
    }
    let edges = [(0, 1, 2), (1, 2, 3), (3, 2, 5), (3, 0, 6), (0, 3, 7), (1, 3, 8)];
    for (from, into, label) in edges {
        graph.add_edge(from, into, label).unwrap();
    }
    graph
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    items.into_iter().any(|item| !seen.insert(item))
}

/// Checks that every row has one cell per vertex.
pub fn check_square<V, E>(graph: &Graph<V, E>) -> bool {
    let count = graph.nr_of_vertices();
    graph.row_lengths().all(|len| len == count)
}

/// Snapshot of which cells hold an edge.
pub fn edge_matrix<V, E>(graph: &Graph<V, E>) -> Vec<Vec<bool>> {
    let count = graph.nr_of_vertices();
    (0..count)
        .map(|from| (0..count).map(|into| graph.edge_exists(from, into)).collect())
        .collect()
}
