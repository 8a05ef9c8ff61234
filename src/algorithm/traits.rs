use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Result of a single-pair shortest path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult<W> {
    /// Total weight of the path, `W::max_value()` when the destination is unreachable
    pub distance: W,

    /// Vertices from origin to destination inclusive; empty when unreachable
    pub path: Vec<VertexId>,
}

impl<W> PathResult<W>
where
    W: Weight,
{
    /// Result for a destination that cannot be reached
    pub fn unreachable() -> Self {
        PathResult {
            distance: W::max_value(),
            path: Vec::new(),
        }
    }

    /// True when a path to the destination was found
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Distance as an option, `None` for unreachable destinations
    pub fn distance(&self) -> Option<W> {
        self.is_reachable().then_some(self.distance)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute the shortest path from `origin` to `destination`.
    ///
    /// Both vertices must exist. An unreachable destination is not an error.
    fn shortest_path(
        &self,
        graph: &G,
        origin: VertexId,
        destination: VertexId,
    ) -> Result<PathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Fails with `VertexNotFound` unless both endpoints are in the graph
pub(crate) fn check_endpoints<W, G>(graph: &G, origin: VertexId, destination: VertexId) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
{
    for vertex in [origin, destination] {
        if !graph.has_vertex(vertex) {
            return Err(Error::VertexNotFound(vertex));
        }
    }
    Ok(())
}

/// Packs the destination's distance and its rebuilt path
pub(crate) fn build_result<W: Weight>(
    distance: W,
    predecessors: &HashMap<VertexId, VertexId>,
    origin: VertexId,
    destination: VertexId,
) -> PathResult<W> {
    let path = reconstruct_path(predecessors, origin, destination);
    if path.is_empty() {
        PathResult::unreachable()
    } else {
        PathResult { distance, path }
    }
}

/// Walks predecessor links back from `destination` and returns the path in
/// origin-to-destination order.
///
/// A vertex missing from `predecessors` was never reached. Returns an empty
/// path when the destination is unreachable, `[origin]` when both are equal.
pub(crate) fn reconstruct_path(
    predecessors: &HashMap<VertexId, VertexId>,
    origin: VertexId,
    destination: VertexId,
) -> Vec<VertexId> {
    if origin == destination {
        return vec![origin];
    }
    if !predecessors.contains_key(&destination) {
        return Vec::new();
    }

    let mut path = vec![destination];
    let mut current = destination;
    while current != origin {
        match predecessors.get(&current) {
            Some(&pred) => {
                path.push(pred);
                current = pred;
            }
            None => return Vec::new(),
        }

        // A predecessor cycle can only come from a negative cycle
        if path.len() > predecessors.len() + 1 {
            log::warn!("predecessor cycle while rebuilding path to {}", destination);
            return Vec::new();
        }
    }

    path.reverse();
    path
}
