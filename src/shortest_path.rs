//! Single-source, single-target search over non-negative edge costs.
//!
//! Dijkstra and A* share one loop; Dijkstra is A* with a heuristic of zero.
//! The frontier is a binary heap without decrease-key: a vertex may be pushed
//! several times, the first pop settles it and later pops are discarded.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use crate::{
    Graph,
    error::{GraphError, Result},
    path::Path,
    tracing_support::{debug, trace},
};

struct FrontierEntry {
    vertex: usize,
    cost: f64,
    /// `cost` plus the heuristic estimate to the target.
    priority: f64,
    predecessor: Option<usize>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `BinaryHeap` pops the greatest entry: the lowest priority, then the
/// highest accumulated cost, then the lowest vertex index.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| self.cost.total_cmp(&other.cost))
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

pub(crate) fn search<V, E, C, H>(
    graph: &Graph<V, E>,
    start: usize,
    end: usize,
    cost_fn: C,
    heuristic: H,
) -> Result<Path>
where
    C: Fn(&E) -> f64,
    H: Fn(&Graph<V, E>, usize, usize) -> f64,
{
    graph.check_index(start)?;
    graph.check_index(end)?;
    if start == end {
        return Ok(Path::new(0.0, vec![start], 0));
    }

    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        vertex: start,
        cost: 0.0,
        priority: 0.0,
        predecessor: None,
    });
    // Settled vertices and the vertex each was reached from.
    let mut settled: HashMap<usize, Option<usize>> = HashMap::new();

    while let Some(current) = frontier.pop() {
        if current.vertex == end {
            let vertices = reconstruct(&settled, current.predecessor, end);
            debug!(
                start,
                end,
                cost = current.cost,
                settled = settled.len(),
                "found path"
            );
            return Ok(Path::new(current.cost, vertices, settled.len()));
        }
        if settled.contains_key(&current.vertex) {
            continue;
        }
        settled.insert(current.vertex, current.predecessor);
        trace!(
            vertex = current.vertex,
            predecessor = ?current.predecessor,
            cost = current.cost,
            "settled vertex"
        );

        for (next, label) in graph.edges_from(current.vertex) {
            if settled.contains_key(&next) {
                continue;
            }
            let edge_cost = cost_fn(label);
            debug_assert!(edge_cost >= 0.0, "invalid edge cost {edge_cost}");
            let cost = current.cost + edge_cost;
            frontier.push(FrontierEntry {
                vertex: next,
                cost,
                priority: cost + heuristic(graph, next, end),
                predecessor: Some(current.vertex),
            });
        }
    }

    debug!(start, end, settled = settled.len(), "no path");
    Err(GraphError::NoPath { start, end })
}

/// Walks the predecessor links back from the end vertex.
fn reconstruct(
    settled: &HashMap<usize, Option<usize>>,
    predecessor: Option<usize>,
    end: usize,
) -> Vec<usize> {
    let mut vertices = vec![end];
    let mut link = predecessor;
    while let Some(vertex) = link {
        vertices.push(vertex);
        link = settled.get(&vertex).copied().flatten();
    }
    vertices.reverse();
    vertices
}
