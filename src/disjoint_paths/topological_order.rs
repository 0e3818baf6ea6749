use crate::disjoint_paths::graph::Graph;
use num_traits::{Float, NumAssign};
use std::fmt::Debug;

impl<Length> Graph<Length>
where
    Length: Float + NumAssign + Debug,
{
    // O(n + m)
    // Kahn's algorithm: vertices without predecessors first, then every vertex whose
    // predecessors have all been placed. Returns None if some vertex is never placed,
    // i.e. the graph has a directed cycle.
    pub(crate) fn compute_topological_order(&self) -> Option<Vec<usize>> {
        let mut num_predecessors = vec![0_usize; self.num_vertices()];
        for u in 0..self.num_vertices() {
            for edge_id in self.leaving_edges(u) {
                num_predecessors[self.edges[edge_id].terminal_vertex] += 1;
            }
        }

        let mut order: Vec<usize> = (0..self.num_vertices()).filter(|&u| num_predecessors[u] == 0).collect();
        order.reserve(self.num_vertices() - order.len());

        // order[..processed] have had their successors visited, order[processed..front] form the frontier
        let mut processed = 0;
        while processed < order.len() {
            let front = order.len();
            while processed < front {
                let u = order[processed];
                processed += 1;
                for edge_id in self.leaving_edges(u) {
                    let v = self.edges[edge_id].terminal_vertex;
                    debug_assert!(num_predecessors[v] > 0);
                    num_predecessors[v] -= 1;
                    if num_predecessors[v] == 0 {
                        order.push(v);
                    }
                }
            }
        }

        if order.len() < self.num_vertices() {
            return None;
        }
        Some(order)
    }
}
