//! The whole subway network: stations plus every line.
//!
//! Loads a network description from JSON, replays each line's section
//! insertions and removals through the chain rules, and answers path
//! queries by building a fresh [`PathFinder`] per call.

mod dto;
mod error;
mod file;

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{Line, LineId, Station, StationId};
use crate::path::{PathFinder, ShortestPath};

pub use dto::{PathResponse, StationInPathResponse};
pub use error::NetworkError;
use file::{LineFile, NetworkFile};

/// Stations and lines of one network.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a network description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let network = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            stations = network.stations.len(),
            lines = network.lines.len(),
            "loaded network"
        );
        Ok(network)
    }

    /// Parse a network description.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let file: NetworkFile = serde_json::from_str(json)?;

        let mut network = Self::new();
        for station in file.stations {
            network.add_station(station)?;
        }
        for line in file.lines {
            network.add_line_from_file(line)?;
        }
        Ok(network)
    }

    /// Register a station. It is not routable until a line uses it.
    pub fn add_station(&mut self, station: Station) -> Result<(), NetworkError> {
        if self.stations.contains_key(&station.id()) {
            return Err(NetworkError::DuplicateStation(station.id()));
        }
        self.stations.insert(station.id(), station);
        Ok(())
    }

    /// Register a line built elsewhere.
    pub fn add_line(&mut self, line: Line) -> Result<(), NetworkError> {
        if self.lines.contains_key(&line.id()) {
            return Err(NetworkError::DuplicateLine(line.id()));
        }
        self.lines.insert(line.id(), line);
        Ok(())
    }

    fn add_line_from_file(&mut self, desc: LineFile) -> Result<(), NetworkError> {
        let id = desc.line_id();
        let section_error = |error| NetworkError::Section { line: id, error };

        let mut sections = desc.sections.iter();
        let first = sections.next().ok_or(NetworkError::EmptyLine(id))?;
        let mut line = Line::new(
            id,
            desc.name.as_str(),
            desc.color.as_str(),
            self.require_station(first.up)?.clone(),
            self.require_station(first.down)?.clone(),
            first.distance,
        )
        .map_err(section_error)?;

        for section in sections {
            let up = self.require_station(section.up)?.clone();
            let down = self.require_station(section.down)?.clone();
            line.add_section(up, down, section.distance)
                .map_err(section_error)?;
        }

        for station_id in &desc.removals {
            let station = self.require_station(*station_id)?;
            line.remove_station(station).map_err(section_error)?;
        }

        debug!(
            line = %id,
            name = line.name(),
            sections = line.sections().len(),
            "built line"
        );
        self.add_line(line)
    }

    fn require_station(&self, id: StationId) -> Result<&Station, NetworkError> {
        self.stations
            .get(&id)
            .ok_or(NetworkError::UnknownStation(id))
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.stations.values().find(|s| s.name() == name)
    }

    /// Look up a station by numeric id, falling back to its exact name.
    pub fn resolve(&self, query: &str) -> Result<&Station, NetworkError> {
        if let Ok(raw) = query.parse::<u64>() {
            return self.require_station(StationId(raw));
        }
        self.station_by_name(query)
            .ok_or_else(|| NetworkError::UnknownStationName(query.to_string()))
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    pub fn line_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.lines.get_mut(&id)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// A finder over the current state of every line.
    pub fn path_finder(&self) -> PathFinder {
        PathFinder::from_lines(self.lines.values())
    }

    /// Shortest path between two stations across all lines.
    pub fn find_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<ShortestPath, NetworkError> {
        let source = self.require_station(source)?;
        let target = self.require_station(target)?;
        Ok(self.path_finder().find_paths(source, target)?)
    }
}
