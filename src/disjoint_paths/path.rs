use crate::disjoint_paths::graph::Graph;
use num_traits::{Float, NumAssign};
use std::fmt::Debug;

/// Vertices from the source to the sink, both included, with the sum of the original
/// lengths of the edges between them.
#[derive(PartialEq, Debug, Clone)]
pub struct Path<Length> {
    nodes: Vec<usize>,
    length: Length,
}

impl<Length> Path<Length>
where
    Length: Copy,
{
    #[inline]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn length(&self) -> Length {
        self.length
    }
}

impl<Length> Graph<Length>
where
    Length: Float + NumAssign + Debug,
{
    /// Decomposes the occupied edges into source-to-sink paths and stores them, replacing
    /// the previous ones. If the occupied edges share vertices, several families of paths
    /// explain them and one of them is picked arbitrarily.
    pub fn retrieve_disjoint_paths(&mut self) -> &[Path<Length>] {
        let mut used_edges = vec![false; self.num_edges()];
        let mut paths = Vec::new();

        let starts: Vec<usize> = self.leaving_edges(self.source()).filter(|&edge_id| self.edges[edge_id].occupied).collect();
        for edge_id in starts {
            if !used_edges[edge_id] {
                paths.push(self.retrieve_one_path(edge_id, &mut used_edges));
            }
        }

        self.paths = paths;
        &self.paths
    }

    // Follows occupied edges starting with `edge_id` until the sink.
    fn retrieve_one_path(&self, mut edge_id: usize, used_edges: &mut [bool]) -> Path<Length> {
        used_edges[edge_id] = true;
        let mut nodes = vec![self.edges[edge_id].origin_vertex];
        let mut length = Length::zero();

        loop {
            let edge = &self.edges[edge_id];
            nodes.push(edge.terminal_vertex);
            length += edge.length;
            if edge.terminal_vertex == self.sink() {
                break;
            }

            let next = self.leaving_edges(edge.terminal_vertex).find(|&f| self.edges[f].occupied && !used_edges[f]);
            match next {
                Some(f) => {
                    used_edges[f] = true;
                    edge_id = f;
                }
                None => panic!("occupied edges stop at vertex {} before reaching the sink", edge.terminal_vertex),
            }
        }

        Path { nodes, length }
    }
}

#[cfg(test)]
mod test {
    use crate::disjoint_paths::graph::Graph;
    use rstest::rstest;

    fn occupy(graph: &mut Graph<f64>, lengths: &[f64], occupied: &[usize]) {
        graph.load_lengths(lengths);
        for &edge_id in occupied {
            graph.edges[edge_id].occupied = true;
        }
    }

    #[test]
    fn follows_a_single_chain() {
        let mut graph = Graph::new(3, &[(0, 1), (1, 2)], 0, 2).unwrap();
        occupy(&mut graph, &[-5.0, -5.0], &[0, 1]);

        let paths = graph.retrieve_disjoint_paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes(), &[0, 1, 2]);
        assert_eq!(paths[0].num_nodes(), 3);
        assert_eq!(paths[0].length(), -10.0);
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![0, 2], 1)]
    #[case(vec![0, 1, 2, 3], 2)]
    fn one_path_per_occupied_source_edge(#[case] occupied: Vec<usize>, #[case] expected: usize) {
        let mut graph = Graph::new(4, &[(0, 1), (0, 2), (1, 3), (2, 3)], 0, 3).unwrap();
        occupy(&mut graph, &[-1.0, -2.0, -3.0, -4.0], &occupied);
        assert_eq!(graph.retrieve_disjoint_paths().len(), expected);

        let total: f64 = graph.paths().iter().map(|p| p.length()).sum();
        assert_eq!(total, graph.total_length());
    }

    #[test]
    fn shared_vertex_is_split_between_paths() {
        // 0 -> 1 -> 2 -> 4 and 0 -> 3 -> 2 -> 4 through distinct edges out of 2
        let mut graph = Graph::new(5, &[(0, 1), (1, 2), (0, 3), (3, 2), (2, 4), (2, 4)], 0, 4).unwrap();
        occupy(&mut graph, &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0], &[0, 1, 2, 3, 4, 5]);

        let paths = graph.retrieve_disjoint_paths().to_vec();
        assert_eq!(paths.len(), 2);
        for path in paths.iter() {
            assert_eq!(path.nodes().first(), Some(&0));
            assert_eq!(path.nodes().last(), Some(&4));
            assert_eq!(path.nodes()[2], 2);
            assert_eq!(path.length(), 3.0);
        }
    }

    #[test]
    fn extraction_replaces_previous_paths() {
        let mut graph = Graph::new(3, &[(0, 1), (1, 2)], 0, 2).unwrap();
        occupy(&mut graph, &[-1.0, -1.0], &[0, 1]);
        graph.retrieve_disjoint_paths();
        assert_eq!(graph.paths().len(), 1);

        graph.load_lengths(&[-1.0, -1.0]);
        graph.retrieve_disjoint_paths();
        assert!(graph.paths().is_empty());
    }

    #[test]
    #[should_panic]
    fn broken_chain_is_fatal() {
        let mut graph = Graph::new(3, &[(0, 1), (1, 2)], 0, 2).unwrap();
        occupy(&mut graph, &[-1.0, -1.0], &[0]);
        graph.retrieve_disjoint_paths();
    }
}
