//! Transit SSSP - shortest paths over a directed, typed-arc transit network
//!
//! This library provides a hash-map backed [`Network`] and three classical
//! single-pair shortest path strategies that can be compared side by side:
//!
//! - [`DenseDijkstra`]: label-setting with a linear minimum scan, O(V²)
//! - [`HeapDijkstra`]: label-setting driven by a pairing heap, O((V + E) log V)
//! - [`BellmanFord`]: relaxation passes, O(V·E), tolerant of negative weights

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dense_dijkstra::DenseDijkstra, heap_dijkstra::HeapDijkstra,
    AlgorithmKind, PathResult, ShortestPathAlgorithm,
};
pub use data_structures::{HeapHandle, PairingHeap};
/// Re-export main types for convenient use
pub use graph::network::Network;
pub use graph::{ArcAttributes, ArcType, Graph, MutableGraph, VertexId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    #[error("Arc not found: from {0} to {1}")]
    ArcNotFound(VertexId, VertexId),

    #[error("Vertex already exists: {0}")]
    VertexAlreadyExists(VertexId),

    #[error("Arc already exists: from {0} to {1}")]
    ArcAlreadyExists(VertexId, VertexId),

    #[error("Heap is empty")]
    EmptyHeap,

    #[error("Invalid heap handle: {0}")]
    InvalidHandle(usize),

    #[error("New key is greater than the current key of heap handle {0}")]
    KeyNotDecreased(usize),

    #[error("Negative cycle reachable from origin detected at vertex {0}")]
    NegativeCycle(VertexId),
}

impl Error {
    /// True for errors raised because a vertex or arc does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::VertexNotFound(_) | Error::ArcNotFound(_, _))
    }

    /// True for errors raised when adding a vertex or arc twice
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            Error::VertexAlreadyExists(_) | Error::ArcAlreadyExists(_, _)
        )
    }

    /// True for misuse of a heap handle (stale handle or key increase)
    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, Error::InvalidHandle(_) | Error::KeyNotDecreased(_))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
