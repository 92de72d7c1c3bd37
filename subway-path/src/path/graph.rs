//! Weighted station graph.
//!
//! Vertices are stations; each edge carries the distance of the section it
//! came from. Edges are stored in both directions so a search may traverse
//! a section either way.

use std::collections::BTreeMap;

use crate::domain::{Distance, Station, StationId};

/// An undirected weighted graph of stations.
///
/// Adjacency is kept in ordered maps so that iteration, and therefore the
/// path chosen among equally short alternatives, is stable between runs.
#[derive(Debug, Clone, Default)]
pub struct StationGraph {
    vertices: BTreeMap<StationId, Station>,
    edges: BTreeMap<StationId, BTreeMap<StationId, Distance>>,
}

impl StationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station as a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, station: Station) -> bool {
        if self.vertices.contains_key(&station.id()) {
            return false;
        }
        self.edges.entry(station.id()).or_default();
        self.vertices.insert(station.id(), station);
        true
    }

    /// Connect two stations with the given weight.
    ///
    /// Missing endpoints are added as vertices. Connecting the same pair again
    /// replaces the weight: the last one set wins, weights are never summed
    /// or minimized.
    pub fn add_edge(&mut self, a: &Station, b: &Station, weight: Distance) {
        self.add_vertex(a.clone());
        self.add_vertex(b.clone());
        self.edges.entry(a.id()).or_default().insert(b.id(), weight);
        self.edges.entry(b.id()).or_default().insert(a.id(), weight);
    }

    pub fn contains_vertex(&self, id: StationId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.vertices.get(&id)
    }

    /// Weight of the edge between two stations, if connected.
    pub fn edge_weight(&self, a: StationId, b: StationId) -> Option<Distance> {
        self.edges.get(&a)?.get(&b).copied()
    }

    /// Stations adjacent to `id` with the weight of each connecting edge.
    pub fn neighbors(&self, id: StationId) -> impl Iterator<Item = (StationId, Distance)> + '_ {
        self.edges
            .get(&id)
            .into_iter()
            .flat_map(|adjacent| adjacent.iter().map(|(&to, &w)| (to, w)))
    }

    /// All stations in the graph, in id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Station> {
        self.vertices.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum::<usize>() / 2
    }
}
