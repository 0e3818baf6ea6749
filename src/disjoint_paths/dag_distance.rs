use crate::disjoint_paths::graph::{Graph, LeavingEdges};
use num_traits::{Float, NumAssign};
use std::fmt::Debug;

impl<Length> Graph<Length>
where
    Length: Float + NumAssign + Debug,
{
    // O(n + m)
    // Relaxes the leaving edges of every vertex in topological order. Only valid while no
    // edge has been inverted, but unlike Dijkstra it accepts negative lengths.
    pub(crate) fn dp_compute_distances(&mut self) {
        self.reset_distances();

        for &u in self.topological_order.iter() {
            if !self.vertices[u].is_reached() {
                continue;
            }
            let d = self.vertices[u].distance_from_source;
            for edge_id in LeavingEdges::new(&self.edges, self.vertices[u].leaving_edge_root) {
                let edge = &self.edges[edge_id];
                let new_dist = d + edge.positivized_length;
                let tv = &mut self.vertices[edge.terminal_vertex];
                if new_dist < tv.distance_from_source {
                    tv.distance_from_source = new_dist;
                    tv.pred_edge_toward_source = Some(edge_id);
                }
            }
        }
    }
}
