use core::fmt;

use super::Graph;

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes:")?;
        for node in self.nodes() {
            writeln!(f, "{} {node}", node.id())?;
        }
        writeln!(f)?;
        writeln!(f, "Edges:")?;
        for (_, edge) in self.edges() {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}
