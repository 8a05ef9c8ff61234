use num_traits::CheckedAdd;
use std::collections::HashMap;

use crate::algorithm::traits::{build_result, check_endpoints};
use crate::algorithm::{PathResult, ShortestPathAlgorithm};
use crate::data_structures::{HeapHandle, PairingHeap};
use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Dijkstra's algorithm driven by a pairing heap, O((V + E) log V)
///
/// Every vertex is inserted up front with an infinite key, then lowered
/// through `decrease_key` as shorter paths show up. Like [`DenseDijkstra`],
/// it requires non-negative weights.
///
/// [`DenseDijkstra`]: crate::algorithm::DenseDijkstra
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapDijkstra;

impl HeapDijkstra {
    /// Creates a new heap Dijkstra instance
    pub fn new() -> Self {
        HeapDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for HeapDijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "HeapDijkstra"
    }

    fn shortest_path(
        &self,
        graph: &G,
        origin: VertexId,
        destination: VertexId,
    ) -> Result<PathResult<W>> {
        check_endpoints::<W, G>(graph, origin, destination)?;
        log::debug!(
            "heap dijkstra from {} to {} over {} vertices",
            origin,
            destination,
            graph.vertex_count()
        );

        let infinity = W::max_value();
        let mut heap = PairingHeap::with_capacity(graph.vertex_count());
        // `None` once the vertex is settled
        let mut handles: HashMap<VertexId, Option<HeapHandle>> = graph
            .vertices()
            .map(|v| (v, Some(heap.insert(infinity, v))))
            .collect();
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();

        if let Some(Some(handle)) = handles.get(&origin) {
            heap.decrease_key(*handle, W::zero())?;
        }

        let mut distance = infinity;
        for _ in 0..graph.vertex_count() {
            let closest = heap.find_min()?;
            let dist_u = heap.key(closest)?;
            let u = heap.payload(closest)?;
            if dist_u == infinity {
                break;
            }
            if u == destination {
                distance = dist_u;
                break;
            }

            handles.insert(u, None);
            heap.delete_min()?;
            log::trace!("settled {} at {:?}", u, dist_u);

            for (v, arc) in graph.outgoing_arcs(u) {
                let handle = match handles.get(&v) {
                    Some(Some(handle)) => *handle,
                    _ => continue,
                };
                if let Some(candidate) = dist_u.checked_add(&arc.weight) {
                    if candidate < heap.key(handle)? {
                        heap.decrease_key(handle, candidate)?;
                        predecessors.insert(v, u);
                    }
                }
            }
        }

        let result = build_result(distance, &predecessors, origin, destination);
        log::debug!(
            "heap dijkstra {} -> {}: distance {:?}, {} hops",
            origin,
            destination,
            result.distance(),
            result.path.len().saturating_sub(1)
        );
        Ok(result)
    }
}
