use crate::disjoint_paths::graph::{Graph, LeavingEdges};
use crate::disjoint_paths::indexed_heap::IndexedBinaryHeap;
use num_traits::{Float, NumAssign};
use std::fmt::Debug;

impl<Length> Graph<Length>
where
    Length: Float + NumAssign + Debug,
{
    // O((n + m) log n)
    // Sets distance_from_source and pred_edge_toward_source of every vertex according to
    // the positivized lengths, which must all be non-negative. Edge occupation is untouched.
    pub(crate) fn find_shortest_path(&mut self, heap: &mut IndexedBinaryHeap) {
        self.reset_distances();
        heap.reset(self.num_vertices());
        heap.decrease_key(self.source(), |v| self.vertices[v].distance_from_source);

        while let Some(u) = heap.pop(|v| self.vertices[v].distance_from_source) {
            // everything left in the heap is unreachable
            if !self.vertices[u].is_reached() {
                break;
            }

            let d = self.vertices[u].distance_from_source;
            for edge_id in LeavingEdges::new(&self.edges, self.vertices[u].leaving_edge_root) {
                let edge = &self.edges[edge_id];
                debug_assert!(edge.positivized_length >= Length::zero());
                let (tv, new_dist) = (edge.terminal_vertex, d + edge.positivized_length);
                if new_dist < self.vertices[tv].distance_from_source {
                    self.vertices[tv].distance_from_source = new_dist;
                    self.vertices[tv].pred_edge_toward_source = Some(edge_id);
                    heap.decrease_key(tv, |v| self.vertices[v].distance_from_source);
                }
            }
        }
    }
}
