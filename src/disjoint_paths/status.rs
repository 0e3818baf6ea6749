use std::fmt;

#[derive(Default, PartialEq, Debug, Clone, Copy)]
pub enum Status {
    #[default]
    NotSolved,
    BadInput,
    Optimal,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NotSolved => write!(f, "not solved"),
            Status::BadInput => write!(f, "bad input"),
            Status::Optimal => write!(f, "optimal"),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum GraphError {
    VertexOutOfRange { edge_id: usize, vertex: usize },
    InvalidTerminal { source: usize, sink: usize },
    NotADag,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange { edge_id, vertex } => write!(f, "edge {} refers to vertex {} which does not exist", edge_id, vertex),
            GraphError::InvalidTerminal { source, sink } => write!(f, "invalid source {} / sink {}", source, sink),
            GraphError::NotADag => write!(f, "the graph is not a DAG"),
        }
    }
}

impl std::error::Error for GraphError {}
