use num_traits::CheckedAdd;
use std::collections::{HashMap, HashSet};

use crate::algorithm::traits::{build_result, check_endpoints};
use crate::algorithm::{PathResult, ShortestPathAlgorithm};
use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Dijkstra's algorithm with a linear scan for the closest vertex, O(V²)
///
/// Only correct for non-negative weights. Negative arcs are not rejected,
/// they simply yield an undefined distance.
#[derive(Debug, Default, Clone, Copy)]
pub struct DenseDijkstra;

impl DenseDijkstra {
    /// Creates a new dense Dijkstra instance
    pub fn new() -> Self {
        DenseDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for DenseDijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "DenseDijkstra"
    }

    fn shortest_path(
        &self,
        graph: &G,
        origin: VertexId,
        destination: VertexId,
    ) -> Result<PathResult<W>> {
        check_endpoints::<W, G>(graph, origin, destination)?;
        log::debug!(
            "dense dijkstra from {} to {} over {} vertices",
            origin,
            destination,
            graph.vertex_count()
        );

        let infinity = W::max_value();
        let mut distances: HashMap<VertexId, W> =
            graph.vertices().map(|v| (v, infinity)).collect();
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
        let mut unsettled: HashSet<VertexId> = graph.vertices().collect();
        distances.insert(origin, W::zero());

        for _ in 0..graph.vertex_count() {
            // Ties go to the smallest id so results are reproducible
            let closest = unsettled
                .iter()
                .copied()
                .min_by_key(|v| (distances[v], *v));
            let u = match closest {
                Some(u) => u,
                None => break,
            };
            unsettled.remove(&u);

            let dist_u = distances[&u];
            if u == destination || dist_u == infinity {
                break;
            }
            log::trace!("settled {} at {:?}", u, dist_u);

            for (v, arc) in graph.outgoing_arcs(u) {
                if !unsettled.contains(&v) {
                    continue;
                }
                if let Some(candidate) = dist_u.checked_add(&arc.weight) {
                    if candidate < distances[&v] {
                        distances.insert(v, candidate);
                        predecessors.insert(v, u);
                    }
                }
            }
        }

        let result = build_result(distances[&destination], &predecessors, origin, destination);
        log::debug!(
            "dense dijkstra {} -> {}: distance {:?}, {} hops",
            origin,
            destination,
            result.distance(),
            result.path.len().saturating_sub(1)
        );
        Ok(result)
    }
}
