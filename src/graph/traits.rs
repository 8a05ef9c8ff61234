use num_traits::PrimInt;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::Result;

/// Identifier of a vertex (a stop of the transit network)
pub type VertexId = usize;

/// Type tag carried by an arc (bus, metro, walk...). Stored, never interpreted.
pub type ArcType = u32;

/// Integer arc weight.
///
/// `Weight::max_value()` is reserved as the "unreachable" distance.
pub trait Weight: PrimInt + Debug {}

impl<T> Weight for T where T: PrimInt + Debug {}

/// Attributes stored on every arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcAttributes<W> {
    /// Cost of travelling the arc
    pub weight: W,
    /// Type tag of the arc
    pub arc_type: ArcType,
}

impl<W: Weight> ArcAttributes<W> {
    pub fn new(weight: W, arc_type: ArcType) -> Self {
        ArcAttributes { weight, arc_type }
    }
}

/// Trait representing a weighted directed network with typed arcs
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the network
    fn vertex_count(&self) -> usize;

    /// Returns the number of arcs in the network
    fn arc_count(&self) -> usize;

    /// Returns true if the network holds no vertex
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns an iterator over every vertex id
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns an iterator over the outgoing arcs of a vertex
    fn outgoing_arcs(
        &self,
        vertex: VertexId,
    ) -> Box<dyn Iterator<Item = (VertexId, ArcAttributes<W>)> + '_>;

    /// Returns true if the vertex exists in the network
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns true if there's an arc between the two vertices.
    /// Fails if either vertex is missing.
    fn has_arc(&self, origin: VertexId, destination: VertexId) -> Result<bool>;

    /// Gets the weight of an existing arc
    fn arc_weight(&self, origin: VertexId, destination: VertexId) -> Result<W>;

    /// Gets the type tag of an existing arc
    fn arc_type(&self, origin: VertexId, destination: VertexId) -> Result<ArcType>;
}

/// Trait for mutable network operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex with the given id
    fn add_vertex(&mut self, vertex: VertexId) -> Result<()>;

    /// Removes a vertex together with every incoming and outgoing arc
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<()>;

    /// Adds a directed arc between two existing vertices
    fn add_arc(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        weight: W,
        arc_type: ArcType,
    ) -> Result<()>;

    /// Removes an arc from the network
    fn remove_arc(&mut self, origin: VertexId, destination: VertexId) -> Result<()>;

    /// Updates the weight of an existing arc
    fn update_arc_weight(&mut self, origin: VertexId, destination: VertexId, weight: W)
        -> Result<()>;
}
