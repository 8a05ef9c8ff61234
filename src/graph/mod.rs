pub mod traits;
pub mod network;
pub mod generators;

pub use traits::{ArcAttributes, ArcType, Graph, MutableGraph, VertexId, Weight};
pub use network::Network;
