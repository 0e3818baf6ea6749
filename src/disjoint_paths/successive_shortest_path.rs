use crate::disjoint_paths::graph::Graph;
use crate::disjoint_paths::indexed_heap::IndexedBinaryHeap;
use crate::disjoint_paths::reduced_cost::ClampReport;
use crate::disjoint_paths::status::Status;
use log::{debug, trace, warn};
use num_traits::{Float, NumAssign};
use std::fmt::Debug;

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct SolverOptions<Length> {
    /// Largest negative reduced length a single pass may clamp before it is logged as a warning.
    pub drift_tolerance: Length,
}

impl<Length> Default for SolverOptions<Length>
where
    Length: Float,
{
    fn default() -> Self {
        SolverOptions { drift_tolerance: Length::epsilon().sqrt() }
    }
}

pub struct SuccessiveShortestPath<Length> {
    options: SolverOptions<Length>,
    heap: IndexedBinaryHeap,
    clamped: ClampReport<Length>,
    rounds: usize,
}

impl<Length> Default for SuccessiveShortestPath<Length>
where
    Length: Float + NumAssign + Debug,
{
    fn default() -> Self {
        Self::new(SolverOptions::default())
    }
}

impl<Length> SuccessiveShortestPath<Length>
where
    Length: Float + NumAssign + Debug,
{
    pub fn new(options: SolverOptions<Length>) -> Self {
        SuccessiveShortestPath { options, heap: IndexedBinaryHeap::default(), clamped: ClampReport::default(), rounds: 0 }
    }

    /// Clamping accumulated over the last call to `solve`.
    pub fn clamped(&self) -> ClampReport<Length> {
        self.clamped
    }

    /// Number of augmenting paths accepted by the last call to `solve`.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Occupies the family of edge-disjoint source-to-sink paths of minimum total length,
    /// `lengths[i]` being the length of edge `i`. Only paths of negative length are worth
    /// taking, so an empty family is optimal when no such path exists.
    pub fn solve(&mut self, graph: &mut Graph<Length>, lengths: &[Length]) -> Status {
        if lengths.len() != graph.num_edges() || lengths.iter().any(|l| !l.is_finite()) {
            return Status::BadInput;
        }

        self.clamped = ClampReport::default();
        self.rounds = 0;
        graph.load_lengths(lengths);

        // the graph is still a DAG, negative lengths are fine
        graph.dp_compute_distances();

        loop {
            graph.update_positivized_lengths();
            let report = graph.force_positivized_lengths();
            if report.count > 0 {
                trace!("clamped {} reduced lengths, total {:?}, max {:?}", report.count, report.total, report.max);
                if report.max > self.options.drift_tolerance {
                    warn!("clamped a reduced length of {:?}, above the tolerance {:?}", report.max, self.options.drift_tolerance);
                }
                self.clamped.merge(&report);
            }

            graph.find_shortest_path(&mut self.heap);

            match graph.shortest_path_length() {
                Some(length) if length < Length::zero() => {
                    debug!("found a path of length {:?}", length);
                    graph.invert_shortest_path();
                    self.rounds += 1;
                }
                _ => break,
            }
        }

        // occupied edges are the inverted ones
        for edge_id in 0..graph.num_edges() {
            if graph.edges[edge_id].occupied {
                graph.invert_edge(edge_id);
            }
        }

        debug!("{} augmenting paths, total length {:?}", self.rounds, graph.total_length());
        Status::Optimal
    }
}

impl<Length> Graph<Length>
where
    Length: Float + NumAssign + Debug,
{
    // Length of the path to the sink in the current residual graph, with the original
    // lengths, or None if the sink is not reached.
    fn shortest_path_length(&self) -> Option<Length> {
        if self.vertices[self.sink()].pred_edge_toward_source.is_none() {
            return None;
        }

        let mut length = Length::zero();
        let mut v = self.sink();
        while let Some(edge_id) = self.vertices[v].pred_edge_toward_source {
            length += self.edges[edge_id].length;
            v = self.edges[edge_id].origin_vertex;
        }
        debug_assert_eq!(v, self.source());
        Some(length)
    }

    // The only place where the occupation of edges changes.
    fn invert_shortest_path(&mut self) {
        let mut v = self.sink();
        while let Some(edge_id) = self.vertices[v].pred_edge_toward_source {
            v = self.edges[edge_id].origin_vertex;
            self.invert_edge(edge_id);
            self.edges[edge_id].occupied = !self.edges[edge_id].occupied;
        }
    }
}

#[cfg(test)]
mod test {
    use super::{SolverOptions, SuccessiveShortestPath};
    use crate::disjoint_paths::graph::Graph;
    use crate::disjoint_paths::indexed_heap::IndexedBinaryHeap;
    use crate::disjoint_paths::status::Status;
    use rstest::rstest;

    fn solve(num_vertices: usize, edges: &[(usize, usize)], lengths: &[f64]) -> Graph<f64> {
        let mut graph = Graph::new(num_vertices, edges, 0, num_vertices - 1).unwrap();
        let status = SuccessiveShortestPath::default().solve(&mut graph, lengths);
        assert_eq!(status, Status::Optimal);
        graph
    }

    #[rstest]
    #[case(vec![-5.0, -5.0], vec![0, 1], -10.0)]
    #[case(vec![-5.0, 4.0], vec![0, 1], -1.0)]
    #[case(vec![-5.0, 5.0], vec![], 0.0)]
    #[case(vec![1.0, 2.0], vec![], 0.0)]
    fn single_chain(#[case] lengths: Vec<f64>, #[case] occupied: Vec<usize>, #[case] total: f64) {
        let graph = solve(3, &[(0, 1), (1, 2)], &lengths);
        assert_eq!(graph.occupied_edges(), occupied);
        assert_eq!(graph.total_length(), total);
    }

    #[test]
    fn two_routes_are_both_taken() {
        let graph = solve(4, &[(0, 1), (0, 2), (1, 3), (2, 3)], &[-1.0, -2.0, -3.0, -4.0]);
        assert_eq!(graph.occupied_edges(), vec![0, 1, 2, 3]);
        assert_eq!(graph.total_length(), -10.0);
    }

    #[test]
    fn a_later_path_reroutes_an_earlier_one() {
        // the best single path is 0 -> 1 -> 2 -> 3 (-5), but 0 -> 1 -> 3 plus 0 -> 2 -> 3 is -8
        let edges = [(0, 1), (1, 2), (2, 3), (1, 3), (0, 2)];
        let lengths = [-2.0, -1.0, -2.0, -2.0, -2.0];
        let mut graph = Graph::new(4, &edges, 0, 3).unwrap();
        let mut solver = SuccessiveShortestPath::default();
        assert_eq!(solver.solve(&mut graph, &lengths), Status::Optimal);

        assert_eq!(graph.occupied_edges(), vec![0, 2, 3, 4]);
        assert_eq!(graph.total_length(), -8.0);
        assert_eq!(solver.rounds(), 2);
        for edge_id in 0..edges.len() {
            let edge = graph.edge(edge_id).unwrap();
            assert_eq!((edge.from, edge.to), edges[edge_id]);
            assert_eq!(edge.length, lengths[edge_id]);
        }
    }

    #[rstest]
    #[case(vec![-1.0])]
    #[case(vec![-1.0, 2.0, 3.0])]
    #[case(vec![-1.0, f64::NAN])]
    #[case(vec![f64::NEG_INFINITY, 0.0])]
    fn bad_lengths_are_rejected(#[case] lengths: Vec<f64>) {
        let mut graph = Graph::new(3, &[(0, 1), (1, 2)], 0, 2).unwrap();
        assert_eq!(SuccessiveShortestPath::default().solve(&mut graph, &lengths), Status::BadInput);
        assert!(graph.occupied_edges().is_empty());
    }

    #[test]
    fn repeated_solves_start_from_scratch() {
        let edges = [(0, 1), (0, 2), (1, 3), (2, 3)];
        let mut graph = Graph::new(4, &edges, 0, 3).unwrap();
        let mut solver = SuccessiveShortestPath::new(SolverOptions { drift_tolerance: 1e-9 });

        solver.solve(&mut graph, &[-1.0, -2.0, -3.0, -4.0]);
        let first = graph.occupied_edges();
        solver.solve(&mut graph, &[-1.0, 2.0, -3.0, 4.0]);
        assert_eq!(graph.occupied_edges(), vec![0, 2]);
        assert_eq!(solver.rounds(), 1);
        solver.solve(&mut graph, &[-1.0, -2.0, -3.0, -4.0]);
        assert_eq!(graph.occupied_edges(), first);
        assert_eq!(solver.rounds(), 2);
    }

    #[test]
    fn exact_lengths_need_no_clamping() {
        let mut graph = Graph::new(4, &[(0, 1), (0, 2), (1, 3), (2, 3)], 0, 3).unwrap();
        let mut solver = SuccessiveShortestPath::default();
        solver.solve(&mut graph, &[-1.0, -2.0, -3.0, -4.0]);
        assert_eq!(solver.clamped().count, 0);
    }

    #[test]
    fn edges_the_source_cannot_reach_are_ignored() {
        // 3 -> 0 -> 1 -> 2, 3 -> 2
        let mut graph = Graph::new(4, &[(3, 0), (0, 1), (1, 2), (3, 2)], 0, 2).unwrap();
        let mut solver = SuccessiveShortestPath::default();
        assert_eq!(solver.solve(&mut graph, &[-100.0, -1.0, -1.0, -100.0]), Status::Optimal);
        assert_eq!(graph.occupied_edges(), vec![1, 2]);
        assert_eq!(solver.clamped().count, 0);
    }

    #[test]
    fn tree_edges_are_zero_after_every_reweighting() {
        let edges = [(0, 1), (1, 2), (2, 3), (1, 3), (0, 2)];
        let mut graph = Graph::<f64>::new(4, &edges, 0, 3).unwrap();
        graph.load_lengths(&[-0.21, -0.13, -0.27, -0.19, -0.23]);
        graph.dp_compute_distances();

        let mut rounds = 0;
        loop {
            graph.update_positivized_lengths();
            for vertex in graph.vertices.iter() {
                if let Some(edge_id) = vertex.pred_edge_toward_source {
                    let length = graph.edges[edge_id].positivized_length;
                    assert!(length.abs() < 1e-12, "round {} edge {} is {}", rounds, edge_id, length);
                }
            }
            graph.force_positivized_lengths();
            graph.find_shortest_path(&mut IndexedBinaryHeap::default());
            match graph.shortest_path_length() {
                Some(length) if length < 0.0 => {
                    graph.invert_shortest_path();
                    rounds += 1;
                }
                _ => break,
            }
        }
        assert_eq!(rounds, 2);
    }

    #[test]
    fn works_with_single_precision() {
        let mut graph = Graph::<f32>::new(3, &[(0, 1), (1, 2)], 0, 2).unwrap();
        assert_eq!(SuccessiveShortestPath::default().solve(&mut graph, &[-0.5, -0.25]), Status::Optimal);
        assert_eq!(graph.total_length(), -0.75);
    }
}
