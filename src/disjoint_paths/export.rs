use crate::disjoint_paths::graph::Graph;
use num_traits::{Float, NumAssign};
use std::fmt::{Debug, Display};
use std::io::{self, Write};

impl<Length> Graph<Length>
where
    Length: Float + NumAssign + Debug + Display,
{
    /// One line per edge, `from -> to (length)`, with a trailing `*` on occupied edges.
    pub fn write_edges<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for edge_id in 0..self.num_edges() {
            let edge = &self.edges[edge_id];
            write!(w, "{} -> {} ({})", edge.origin_vertex, edge.terminal_vertex, edge.length)?;
            if edge.occupied {
                write!(w, " *")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    /// Graphviz document of the graph with the occupied edges in bold.
    pub fn write_dot<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "digraph {{")?;
        writeln!(w, "        rankdir=\"LR\";")?;
        writeln!(w, "        node [shape=circle,width=0.75,fixedsize=true];")?;
        writeln!(w, "        edge [color=gray,arrowhead=open]")?;
        writeln!(w, "        {} [peripheries=2];", self.source())?;
        writeln!(w, "        {} [peripheries=2];", self.sink())?;
        for edge in self.edges.iter() {
            write!(w, "        {} -> {} [", edge.origin_vertex, edge.terminal_vertex)?;
            if edge.occupied {
                write!(w, "style=bold,color=black,")?;
            }
            writeln!(w, "label=\"{}\"];", edge.length)?;
        }
        writeln!(w, "}}")
    }
}
