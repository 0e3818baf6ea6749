use crate::disjoint_paths::path::Path;
use crate::disjoint_paths::status::GraphError;
use num_traits::{Float, NumAssign};
use std::fmt::Debug;

/// An edge as the caller described it, in its original orientation.
#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Length> {
    pub from: usize,
    pub to: usize,
    pub length: Length,
    pub occupied: bool,
}

// Edges live in an arena indexed by their id. The two links thread every
// edge into the leaving list of its current origin vertex, so reversing an
// edge only moves it between two lists.
#[derive(Debug, Clone)]
pub(crate) struct InsideEdge<Length> {
    pub origin_vertex: usize,
    pub terminal_vertex: usize,
    pub length: Length,
    pub positivized_length: Length,
    pub occupied: bool,
    pub next_leaving_edge: Option<usize>,
    pub pred_leaving_edge: Option<usize>,
}

#[derive(Debug, Clone)]
pub(crate) struct Vertex<Length> {
    pub distance_from_source: Length,
    pub pred_edge_toward_source: Option<usize>,
    pub leaving_edge_root: Option<usize>,
}

impl<Length> Vertex<Length>
where
    Length: Float,
{
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.distance_from_source < Length::max_value()
    }
}

pub(crate) struct LeavingEdges<'a, Length> {
    edges: &'a [InsideEdge<Length>],
    current: Option<usize>,
}

impl<'a, Length> LeavingEdges<'a, Length> {
    pub(crate) fn new(edges: &'a [InsideEdge<Length>], root: Option<usize>) -> Self {
        LeavingEdges { edges, current: root }
    }
}

impl<Length> Iterator for LeavingEdges<'_, Length> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let edge_id = self.current?;
        self.current = self.edges[edge_id].next_leaving_edge;
        Some(edge_id)
    }
}

// The heap used by Dijkstra is scratch of the solver, see `SuccessiveShortestPath`.
pub struct Graph<Length> {
    source: usize,
    sink: usize,
    pub(crate) vertices: Vec<Vertex<Length>>,
    pub(crate) edges: Vec<InsideEdge<Length>>,
    // valid for the original orientation only
    pub(crate) topological_order: Vec<usize>,
    pub(crate) paths: Vec<Path<Length>>,
}

impl<Length> Graph<Length>
where
    Length: Float + NumAssign + Debug,
{
    /// Builds the graph from `(origin, terminal)` pairs; the position of a
    /// pair is the id of its edge. Fails if an index is out of range, if
    /// `source == sink`, or if the edges contain a directed cycle.
    pub fn new(num_vertices: usize, edges: &[(usize, usize)], source: usize, sink: usize) -> Result<Self, GraphError> {
        if source >= num_vertices || sink >= num_vertices || source == sink {
            return Err(GraphError::InvalidTerminal { source, sink });
        }

        let mut graph = Graph {
            source,
            sink,
            vertices: (0..num_vertices)
                .map(|_| Vertex { distance_from_source: Length::max_value(), pred_edge_toward_source: None, leaving_edge_root: None })
                .collect(),
            edges: Vec::with_capacity(edges.len()),
            topological_order: Vec::new(),
            paths: Vec::new(),
        };

        for (edge_id, &(from, to)) in edges.iter().enumerate() {
            for vertex in [from, to] {
                if vertex >= num_vertices {
                    return Err(GraphError::VertexOutOfRange { edge_id, vertex });
                }
            }
            graph.edges.push(InsideEdge {
                origin_vertex: from,
                terminal_vertex: to,
                length: Length::zero(),
                positivized_length: Length::zero(),
                occupied: false,
                next_leaving_edge: None,
                pred_leaving_edge: None,
            });
            graph.add_leaving_edge(from, edge_id);
        }

        graph.topological_order = graph.compute_topological_order().ok_or(GraphError::NotADag)?;
        Ok(graph)
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> usize {
        self.sink
    }

    pub fn edge(&self, edge_id: usize) -> Option<Edge<Length>> {
        let edge = self.edges.get(edge_id)?;
        Some(Edge { from: edge.origin_vertex, to: edge.terminal_vertex, length: edge.length, occupied: edge.occupied })
    }

    pub fn occupied_edges(&self) -> Vec<usize> {
        (0..self.num_edges()).filter(|&edge_id| self.edges[edge_id].occupied).collect()
    }

    /// Sum of the lengths of the occupied edges, i.e. the cost of the flow.
    pub fn total_length(&self) -> Length {
        self.edges.iter().filter(|e| e.occupied).fold(Length::zero(), |sum, e| sum + e.length)
    }

    /// Paths stored by the last call to `retrieve_disjoint_paths`.
    pub fn paths(&self) -> &[Path<Length>] {
        &self.paths
    }

    #[inline]
    pub(crate) fn leaving_edges(&self, u: usize) -> LeavingEdges<'_, Length> {
        LeavingEdges::new(&self.edges, self.vertices[u].leaving_edge_root)
    }

    pub(crate) fn reset_distances(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.distance_from_source = Length::max_value();
            vertex.pred_edge_toward_source = None;
        }
        self.vertices[self.source].distance_from_source = Length::zero();
    }

    pub(crate) fn load_lengths(&mut self, lengths: &[Length]) {
        debug_assert_eq!(lengths.len(), self.num_edges());
        for (edge, &length) in self.edges.iter_mut().zip(lengths) {
            edge.length = length;
            edge.positivized_length = length;
            edge.occupied = false;
        }
    }

    fn add_leaving_edge(&mut self, u: usize, edge_id: usize) {
        let root = self.vertices[u].leaving_edge_root;
        self.edges[edge_id].next_leaving_edge = root;
        self.edges[edge_id].pred_leaving_edge = None;
        if let Some(root) = root {
            self.edges[root].pred_leaving_edge = Some(edge_id);
        }
        self.vertices[u].leaving_edge_root = Some(edge_id);
    }

    fn del_leaving_edge(&mut self, u: usize, edge_id: usize) {
        let (pred, next) = (self.edges[edge_id].pred_leaving_edge, self.edges[edge_id].next_leaving_edge);
        match pred {
            Some(pred) => self.edges[pred].next_leaving_edge = next,
            None => {
                debug_assert_eq!(self.vertices[u].leaving_edge_root, Some(edge_id));
                self.vertices[u].leaving_edge_root = next;
            }
        }
        if let Some(next) = next {
            self.edges[next].pred_leaving_edge = pred;
        }
        self.edges[edge_id].next_leaving_edge = None;
        self.edges[edge_id].pred_leaving_edge = None;
    }

    /// Swaps the endpoints of an edge and negates its lengths.
    pub(crate) fn invert_edge(&mut self, edge_id: usize) {
        let (origin, terminal) = (self.edges[edge_id].origin_vertex, self.edges[edge_id].terminal_vertex);
        self.del_leaving_edge(origin, edge_id);
        self.add_leaving_edge(terminal, edge_id);

        let edge = &mut self.edges[edge_id];
        edge.length = -edge.length;
        edge.positivized_length = -edge.positivized_length;
        edge.origin_vertex = terminal;
        edge.terminal_vertex = origin;
    }
}
