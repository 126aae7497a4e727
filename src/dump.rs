use std::fmt::{self, Display, Formatter};

use crate::Graph;

const DEFAULT_COLUMN_WIDTH: usize = 8;

/// A printable view of a graph's adjacency matrix.
///
/// The first line lists the vertex payloads; each following line starts with
/// a vertex payload and shows the label of every outgoing edge, or `-` where
/// there is none. Cells are right-aligned in fixed-width columns.
pub struct MatrixDump<'g, V, E> {
    graph: &'g Graph<V, E>,
    width: usize,
}

impl<'g, V, E> MatrixDump<'g, V, E> {
    pub(crate) fn new(graph: &'g Graph<V, E>) -> Self {
        Self {
            graph,
            width: DEFAULT_COLUMN_WIDTH,
        }
    }

    /// Sets the column width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl<V, E> Display for MatrixDump<'_, V, E>
where
    V: Display,
    E: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.width;
        write!(f, "{:>width$}", "")?;
        for vertex in self.graph.vertices() {
            write!(f, "{:>width$}", vertex.data.to_string())?;
        }
        writeln!(f)?;

        let count = self.graph.nr_of_vertices();
        for vertex in self.graph.vertices() {
            write!(f, "{:>width$}", vertex.data.to_string())?;
            for into in 0..count {
                match self.graph.label(vertex.id, into) {
                    Some(label) => write!(f, "{:>width$}", label.to_string())?,
                    None => write!(f, "{:>width$}", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Graph;

    #[test]
    fn test_dump_layout() {
        let mut graph = Graph::new();
        graph.insert_vertex("A");
        graph.insert_vertex("B");
        graph.add_edge(0, 1, 7).unwrap();
        graph.add_edge(1, 1, 3).unwrap();
        let dump = graph.matrix_dump().with_width(3).to_string();
        assert_eq!(dump, "     A  B\n  A  -  7\n  B  -  3\n");
    }

    #[test]
    fn test_dump_empty_graph() {
        let graph: Graph<String, u8> = Graph::new();
        assert_eq!(graph.matrix_dump().to_string(), "        \n");
    }
}
