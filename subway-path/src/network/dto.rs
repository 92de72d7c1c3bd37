//! Response shapes for path queries.

use serde::Serialize;

use crate::domain::Station;
use crate::path::ShortestPath;

/// A station on a returned path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationInPathResponse {
    pub id: u64,
    pub name: String,
}

impl From<&Station> for StationInPathResponse {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id().0,
            name: station.name().to_string(),
        }
    }
}

/// The answer to a path query: stations in travel order plus total distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResponse {
    pub stations: Vec<StationInPathResponse>,
    pub distance: u64,
}

impl From<&ShortestPath> for PathResponse {
    fn from(path: &ShortestPath) -> Self {
        Self {
            stations: path.stations().iter().map(StationInPathResponse::from).collect(),
            distance: path.distance(),
        }
    }
}
