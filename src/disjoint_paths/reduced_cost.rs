use crate::disjoint_paths::graph::Graph;
use num_traits::{Float, NumAssign};
use std::fmt::Debug;

/// Negative reduced lengths forced to zero, caused by rounding errors.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ClampReport<Length> {
    pub count: usize,
    pub total: Length,
    pub max: Length,
}

impl<Length> Default for ClampReport<Length>
where
    Length: Float,
{
    fn default() -> Self {
        ClampReport { count: 0, total: Length::zero(), max: Length::zero() }
    }
}

impl<Length> ClampReport<Length>
where
    Length: Float,
{
    pub fn merge(&mut self, other: &ClampReport<Length>) {
        self.count += other.count;
        self.total = self.total + other.total;
        self.max = self.max.max(other.max);
    }
}

impl<Length> Graph<Length>
where
    Length: Float + NumAssign + Debug,
{
    // Adds d(origin) - d(terminal) to every edge. Any two paths with the same endpoints
    // change by the same amount, edges of the shortest path tree become zero and all the
    // others non-negative. Edges touching an unreached vertex are left as they are: the
    // set of reachable vertices only shrinks from one search to the next.
    pub(crate) fn update_positivized_lengths(&mut self) {
        for edge in self.edges.iter_mut() {
            let (origin, terminal) = (&self.vertices[edge.origin_vertex], &self.vertices[edge.terminal_vertex]);
            if origin.is_reached() && terminal.is_reached() {
                edge.positivized_length += origin.distance_from_source - terminal.distance_from_source;
            }
        }
    }

    // Edges leaving an unreached vertex are never relaxed again and are not touched.
    pub(crate) fn force_positivized_lengths(&mut self) -> ClampReport<Length> {
        let mut report: ClampReport<Length> = ClampReport::default();
        for edge in self.edges.iter_mut() {
            if !self.vertices[edge.origin_vertex].is_reached() {
                continue;
            }
            if edge.positivized_length < Length::zero() {
                report.count += 1;
                report.total -= edge.positivized_length;
                report.max = report.max.max(-edge.positivized_length);
                edge.positivized_length = Length::zero();
            }
        }
        report
    }
}
