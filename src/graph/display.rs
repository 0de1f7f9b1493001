use super::Graph;
use std::fmt::{self, Display, Formatter};

/// Writes the graph in the description format read by
/// [`front_end::compile`](../front_end/fn.compile.html), e.g. `4: 1-2 2-3`.
///
/// Custom vertex labels are not part of the format, so a round trip keeps the
/// structure and resets every label to its id.
impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.num_vertices())?;
        for edge in self.edges() {
            write!(f, " {}", edge)?;
        }
        Ok(())
    }
}

/// Displays a graph as a 0/1 adjacency matrix.
pub struct AdjacencyMatrix<'a>(pub &'a Graph);

impl<'a> Display for AdjacencyMatrix<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        let rule = format!("+----+{}", "---".repeat(graph.num_vertices()));
        writeln!(f, "{}+", rule)?;
        write!(f, "|    |")?;
        for v in graph.vertices() {
            write!(f, "{:>3}", v)?;
        }
        writeln!(f, "|")?;
        writeln!(f, "{}+", rule)?;
        for u in graph.vertices() {
            write!(f, "|{:>3} |", u)?;
            for v in graph.vertices() {
                write!(f, "{:>3}", if graph.has_edge(u, v) { 1 } else { 0 })?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}+", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let graph = Graph::from_edges(4, vec![(2, 1), (3, 2)]).unwrap();
        assert_eq!(graph.to_string(), "4: 1-2 2-3");
        assert_eq!(Graph::with_vertices(3).unwrap().to_string(), "3:");
    }

    #[test]
    fn test_display_ignores_labels() {
        let mut graph = Graph::from_edges(3, vec![(1, 2)]).unwrap();
        graph.set_label(2, "hub").unwrap();
        assert_eq!(graph.to_string(), "3: 1-2");
    }

    #[test]
    fn test_adjacency_matrix() {
        let graph = Graph::from_edges(2, vec![(1, 2)]).unwrap();
        assert_eq!(
            AdjacencyMatrix(&graph).to_string(),
            "\
+----+------+
|    |  1  2|
+----+------+
|  1 |  0  1|
|  2 |  1  0|
+----+------+
"
        );
    }
}
