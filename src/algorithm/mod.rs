pub mod traits;
pub mod dense_dijkstra;
pub mod heap_dijkstra;
pub mod bellman_ford;

pub use bellman_ford::BellmanFord;
pub use dense_dijkstra::DenseDijkstra;
pub use heap_dijkstra::HeapDijkstra;
pub use traits::{PathResult, ShortestPathAlgorithm};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects one of the three shortest path strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// Dijkstra with a linear minimum scan, O(V²)
    DenseDijkstra,
    /// Dijkstra driven by a pairing heap, O((V + E) log V)
    HeapDijkstra,
    /// Bellman-Ford relaxation, O(V·E), accepts negative weights
    BellmanFord,
}

impl AlgorithmKind {
    /// Every strategy, in benchmark order
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::DenseDijkstra,
        AlgorithmKind::HeapDijkstra,
        AlgorithmKind::BellmanFord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::DenseDijkstra => "dense-dijkstra",
            AlgorithmKind::HeapDijkstra => "heap-dijkstra",
            AlgorithmKind::BellmanFord => "bellman-ford",
        }
    }

    /// Whether the strategy stays correct with negative arc weights
    pub fn supports_negative_weights(&self) -> bool {
        matches!(self, AlgorithmKind::BellmanFord)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dense" | "dijkstra" | "dense-dijkstra" => Ok(AlgorithmKind::DenseDijkstra),
            "heap" | "pairing" | "heap-dijkstra" => Ok(AlgorithmKind::HeapDijkstra),
            "bellman" | "bellman-ford" | "bellmanford" => Ok(AlgorithmKind::BellmanFord),
            other => Err(format!("unknown algorithm: {}", other)),
        }
    }
}
