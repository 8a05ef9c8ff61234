use num_traits::CheckedAdd;
use std::collections::HashMap;

use crate::algorithm::traits::{build_result, check_endpoints};
use crate::algorithm::{PathResult, ShortestPathAlgorithm};
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Bellman-Ford relaxation, O(V·E)
///
/// Runs at most `V - 1` passes over every reached vertex and stops as soon
/// as a pass improves nothing. Negative weights are fine. When the passes
/// are exhausted while still improving, one more pass decides whether a
/// negative cycle is reachable from the origin.
#[derive(Debug, Clone, Copy)]
pub struct BellmanFord {
    /// Report reachable negative cycles as `Error::NegativeCycle`
    detect_negative_cycles: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance with negative cycle detection on
    pub fn new() -> Self {
        BellmanFord {
            detect_negative_cycles: true,
        }
    }

    /// Enable or disable the extra pass that reports negative cycles.
    ///
    /// When disabled, a negative cycle only makes distances drift for the
    /// bounded number of passes and the query still returns a result.
    pub fn with_negative_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_negative_cycles = enabled;
        self
    }

    /// One relaxation pass over every vertex with a finite distance.
    /// Returns the last vertex whose distance improved, if any.
    fn relax_all<W, G>(
        graph: &G,
        vertices: &[VertexId],
        distances: &mut HashMap<VertexId, W>,
        predecessors: &mut HashMap<VertexId, VertexId>,
    ) -> Option<VertexId>
    where
        W: Weight,
        G: Graph<W>,
    {
        let infinity = W::max_value();
        let mut improved = None;

        for &u in vertices {
            let dist_u = distances[&u];
            if dist_u == infinity {
                continue;
            }
            for (v, arc) in graph.outgoing_arcs(u) {
                if let Some(candidate) = dist_u.checked_add(&arc.weight) {
                    if candidate < distances[&v] {
                        distances.insert(v, candidate);
                        predecessors.insert(v, u);
                        improved = Some(v);
                    }
                }
            }
        }

        improved
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BellmanFord"
    }

    fn shortest_path(
        &self,
        graph: &G,
        origin: VertexId,
        destination: VertexId,
    ) -> Result<PathResult<W>> {
        check_endpoints::<W, G>(graph, origin, destination)?;
        log::debug!(
            "bellman-ford from {} to {} over {} vertices, {} arcs",
            origin,
            destination,
            graph.vertex_count(),
            graph.arc_count()
        );

        let vertices: Vec<VertexId> = graph.vertices().collect();
        let mut distances: HashMap<VertexId, W> =
            vertices.iter().map(|&v| (v, W::max_value())).collect();
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
        distances.insert(origin, W::zero());

        let passes = vertices.len().saturating_sub(1);
        let mut unstable = true;
        let mut pass = 0;
        while pass < passes && unstable {
            unstable =
                Self::relax_all(graph, &vertices, &mut distances, &mut predecessors).is_some();
            pass += 1;
        }
        log::trace!("bellman-ford settled after {} passes", pass);

        if unstable && self.detect_negative_cycles {
            if let Some(vertex) =
                Self::relax_all(graph, &vertices, &mut distances, &mut predecessors)
            {
                log::warn!(
                    "negative cycle reachable from {} detected at vertex {}",
                    origin,
                    vertex
                );
                return Err(Error::NegativeCycle(vertex));
            }
        }

        let result = build_result(distances[&destination], &predecessors, origin, destination);
        log::debug!(
            "bellman-ford {} -> {}: distance {:?}, {} hops",
            origin,
            destination,
            result.distance(),
            result.path.len().saturating_sub(1)
        );
        Ok(result)
    }
}
