#[cfg(not(feature = "unchecked"))]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of graph identifiers. Wrapping around is harmless in practice: the
/// only effect would be two graphs accepting each other's handles.
#[cfg(not(feature = "unchecked"))]
static GRAPH_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for a graph instance, stamped into every handle the
/// graph issues.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct GraphId(#[cfg(not(feature = "unchecked"))] usize);

impl GraphId {
    /// Create a new unique graph identifier.
    pub fn new() -> Self {
        #[cfg(feature = "unchecked")]
        {
            GraphId()
        }
        #[cfg(not(feature = "unchecked"))]
        {
            let id = GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
            GraphId(id)
        }
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg(not(feature = "unchecked"))]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = GraphId::new();
        let b = GraphId::new();
        assert_ne!(a, b);
    }
}
