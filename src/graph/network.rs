use crate::algorithm::{
    AlgorithmKind, BellmanFord, DenseDijkstra, HeapDijkstra, PathResult, ShortestPathAlgorithm,
};
use crate::graph::traits::{ArcAttributes, ArcType, Graph, MutableGraph, VertexId, Weight};
use crate::{Error, Result};
use std::collections::{HashMap, HashSet};

/// A directed transit network using hash-map adjacency
///
/// Every vertex owns an adjacency map `destination -> attributes`, so arc
/// lookups are O(1) on average. A reverse index `destination -> origins` is
/// kept alongside so removing a vertex only touches its incident arcs.
#[derive(Debug, Clone)]
pub struct Network<W = i64> {
    /// Number of arcs in the network
    arc_count: usize,

    /// Outgoing arcs for each vertex: vertex_id -> {destination -> attributes}
    outgoing_arcs: HashMap<VertexId, HashMap<VertexId, ArcAttributes<W>>>,

    /// Incoming arcs for each vertex: vertex_id -> {origins}
    incoming_arcs: HashMap<VertexId, HashSet<VertexId>>,
}

impl<W> Default for Network<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Network<W>
where
    W: Weight,
{
    /// Creates a new empty network
    pub fn new() -> Self {
        Network {
            arc_count: 0,
            outgoing_arcs: HashMap::new(),
            incoming_arcs: HashMap::new(),
        }
    }

    /// Creates an empty network with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        Network {
            arc_count: 0,
            outgoing_arcs: HashMap::with_capacity(vertices),
            incoming_arcs: HashMap::with_capacity(vertices),
        }
    }

    /// Removes every vertex and arc
    pub fn clear(&mut self) {
        self.outgoing_arcs.clear();
        self.incoming_arcs.clear();
        self.arc_count = 0;
    }

    /// Returns an iterator over the origins of the arcs entering a vertex
    pub fn incoming_arcs(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.incoming_arcs
            .get(&vertex)
            .into_iter()
            .flat_map(|origins| origins.iter().copied())
    }

    /// Number of arcs leaving a vertex
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.outgoing_arcs
            .get(&vertex)
            .map(|arcs| arcs.len())
            .ok_or(Error::VertexNotFound(vertex))
    }

    /// Returns true if any arc carries a negative weight.
    /// Only `bellman_ford` gives correct answers on such networks.
    pub fn has_negative_weights(&self) -> bool {
        self.outgoing_arcs
            .values()
            .flat_map(|arcs| arcs.values())
            .any(|attributes| attributes.weight < W::zero())
    }

    /// Shortest path with the dense O(V²) Dijkstra
    pub fn dijkstra_dense(
        &self,
        origin: VertexId,
        destination: VertexId,
    ) -> Result<PathResult<W>> {
        DenseDijkstra::new().shortest_path(self, origin, destination)
    }

    /// Shortest path with the pairing-heap Dijkstra
    pub fn dijkstra_heap(&self, origin: VertexId, destination: VertexId) -> Result<PathResult<W>> {
        HeapDijkstra::new().shortest_path(self, origin, destination)
    }

    /// Shortest path with Bellman-Ford; accepts negative arc weights
    pub fn bellman_ford(&self, origin: VertexId, destination: VertexId) -> Result<PathResult<W>> {
        BellmanFord::new().shortest_path(self, origin, destination)
    }

    /// Shortest path with the selected strategy
    pub fn shortest_path(
        &self,
        kind: AlgorithmKind,
        origin: VertexId,
        destination: VertexId,
    ) -> Result<PathResult<W>> {
        match kind {
            AlgorithmKind::DenseDijkstra => self.dijkstra_dense(origin, destination),
            AlgorithmKind::HeapDijkstra => self.dijkstra_heap(origin, destination),
            AlgorithmKind::BellmanFord => self.bellman_ford(origin, destination),
        }
    }

    fn attributes(&self, origin: VertexId, destination: VertexId) -> Result<&ArcAttributes<W>> {
        if !self.has_arc(origin, destination)? {
            return Err(Error::ArcNotFound(origin, destination));
        }
        self.outgoing_arcs
            .get(&origin)
            .and_then(|arcs| arcs.get(&destination))
            .ok_or(Error::ArcNotFound(origin, destination))
    }
}

impl<W> Graph<W> for Network<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_arcs.len()
    }

    fn arc_count(&self) -> usize {
        self.arc_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.outgoing_arcs.keys().copied())
    }

    fn outgoing_arcs(
        &self,
        vertex: VertexId,
    ) -> Box<dyn Iterator<Item = (VertexId, ArcAttributes<W>)> + '_> {
        if let Some(arcs) = self.outgoing_arcs.get(&vertex) {
            Box::new(arcs.iter().map(|(target, attributes)| (*target, *attributes)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.outgoing_arcs.contains_key(&vertex)
    }

    fn has_arc(&self, origin: VertexId, destination: VertexId) -> Result<bool> {
        if !self.has_vertex(destination) {
            return Err(Error::VertexNotFound(destination));
        }
        self.outgoing_arcs
            .get(&origin)
            .map(|arcs| arcs.contains_key(&destination))
            .ok_or(Error::VertexNotFound(origin))
    }

    fn arc_weight(&self, origin: VertexId, destination: VertexId) -> Result<W> {
        self.attributes(origin, destination)
            .map(|attributes| attributes.weight)
    }

    fn arc_type(&self, origin: VertexId, destination: VertexId) -> Result<ArcType> {
        self.attributes(origin, destination)
            .map(|attributes| attributes.arc_type)
    }
}

impl<W> MutableGraph<W> for Network<W>
where
    W: Weight,
{
    fn add_vertex(&mut self, vertex: VertexId) -> Result<()> {
        if self.has_vertex(vertex) {
            return Err(Error::VertexAlreadyExists(vertex));
        }
        self.outgoing_arcs.insert(vertex, HashMap::new());
        self.incoming_arcs.insert(vertex, HashSet::new());
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<()> {
        if !self.has_vertex(vertex) {
            return Err(Error::VertexNotFound(vertex));
        }

        // Outgoing first: a self-loop is then already gone from the reverse index
        if let Some(outgoing) = self.outgoing_arcs.get_mut(&vertex) {
            let targets: Vec<VertexId> = outgoing.drain().map(|(target, _)| target).collect();
            for target in targets {
                if let Some(origins) = self.incoming_arcs.get_mut(&target) {
                    origins.remove(&vertex);
                }
                self.arc_count -= 1;
            }
        }

        if let Some(incoming) = self.incoming_arcs.get_mut(&vertex) {
            let sources: Vec<VertexId> = incoming.drain().collect();
            for source in sources {
                if let Some(arcs) = self.outgoing_arcs.get_mut(&source) {
                    if arcs.remove(&vertex).is_some() {
                        self.arc_count -= 1;
                    }
                }
            }
        }

        self.outgoing_arcs.remove(&vertex);
        self.incoming_arcs.remove(&vertex);
        log::trace!("removed vertex {}", vertex);
        Ok(())
    }

    fn add_arc(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        weight: W,
        arc_type: ArcType,
    ) -> Result<()> {
        if self.has_arc(origin, destination)? {
            return Err(Error::ArcAlreadyExists(origin, destination));
        }

        self.outgoing_arcs
            .entry(origin)
            .or_default()
            .insert(destination, ArcAttributes::new(weight, arc_type));
        self.incoming_arcs
            .entry(destination)
            .or_default()
            .insert(origin);
        self.arc_count += 1;
        Ok(())
    }

    fn remove_arc(&mut self, origin: VertexId, destination: VertexId) -> Result<()> {
        let removed = self
            .outgoing_arcs
            .get_mut(&origin)
            .and_then(|arcs| arcs.remove(&destination));
        if removed.is_none() {
            return Err(Error::ArcNotFound(origin, destination));
        }

        if let Some(origins) = self.incoming_arcs.get_mut(&destination) {
            origins.remove(&origin);
        }
        self.arc_count -= 1;
        Ok(())
    }

    fn update_arc_weight(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        weight: W,
    ) -> Result<()> {
        let attributes = self
            .outgoing_arcs
            .get_mut(&origin)
            .and_then(|arcs| arcs.get_mut(&destination))
            .ok_or(Error::ArcNotFound(origin, destination))?;
        attributes.weight = weight;
        Ok(())
    }
}
