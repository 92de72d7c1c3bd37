//! Shortest-path queries across every enrolled line.

use tracing::{debug, warn};

use super::dijkstra::shortest_path;
use super::graph::StationGraph;
use crate::domain::{Line, Sections, Station, StationId};

/// Error from a path query.
///
/// Every kind is a validation failure: the same graph and the same query
/// always produce the same error, so none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The station was never enrolled through any line's sections
    #[error("station {0} is not part of any enrolled line")]
    StationNotInNetwork(StationId),

    /// Source and target are the same station
    #[error("source and target are the same station ({0})")]
    IdenticalEndpoints(StationId),

    /// Both stations are enrolled but not connected
    #[error("no path from {from} to {to}")]
    NoPathExists { from: StationId, to: StationId },
}

/// A minimum-distance path between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    stations: Vec<Station>,
    distance: u64,
}

impl ShortestPath {
    /// Stations from source to target, both inclusive.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Sum of the section distances along the path.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    pub fn source(&self) -> &Station {
        &self.stations[0]
    }

    pub fn target(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }
}

/// Builds a station graph from lines' sections and answers path queries.
///
/// Enroll every line first, then query. The finder does not observe later
/// changes to the lines; build a fresh one (see [`PathFinder::from_lines`])
/// whenever the network changes.
///
/// # Examples
///
/// ```
/// use subway_path::domain::{Distance, Line, LineId, Station, StationId};
/// use subway_path::path::PathFinder;
///
/// let gyodae = Station::new(StationId(1), "교대역");
/// let gangnam = Station::new(StationId(2), "강남역");
/// let line = Line::new(
///     LineId(2), "이호선", "bg-green-600",
///     gyodae.clone(), gangnam.clone(), Distance::new(10).unwrap(),
/// ).unwrap();
///
/// let finder = PathFinder::from_lines([&line]);
/// let path = finder.find_paths(&gyodae, &gangnam).unwrap();
/// assert_eq!(path.distance(), 10);
/// assert_eq!(path.stations(), &[gyodae, gangnam]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    graph: StationGraph,
}

impl PathFinder {
    /// Create a finder with an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a finder with every given line enrolled.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Self {
        let mut finder = Self::new();
        for line in lines {
            finder.enroll_paths(line.sections());
        }
        debug!(
            stations = finder.graph.vertex_count(),
            edges = finder.graph.edge_count(),
            "built station graph"
        );
        finder
    }

    /// Add one line's stations and sections to the graph.
    ///
    /// Enrolling the same sections twice leaves the graph unchanged. When two
    /// lines connect the same pair of stations, the weight enrolled last wins.
    pub fn enroll_paths(&mut self, sections: &Sections) -> &mut Self {
        for station in sections.get_all_stations_by_sections() {
            self.graph.add_vertex(station);
        }
        for section in sections.get_sections() {
            self.graph.add_edge(
                section.up_station(),
                section.down_station(),
                section.distance(),
            );
        }
        self
    }

    /// Find the minimum-distance path from `source` to `target`.
    ///
    /// When several paths share the minimum distance, which one is returned
    /// is unspecified.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `StationNotInNetwork` if either station was never enrolled
    /// - `IdenticalEndpoints` if `source == target`
    /// - `NoPathExists` if the two are not connected
    pub fn find_paths(
        &self,
        source: &Station,
        target: &Station,
    ) -> Result<ShortestPath, PathError> {
        for station in [source, target] {
            if !self.graph.contains_vertex(station.id()) {
                return Err(PathError::StationNotInNetwork(station.id()));
            }
        }

        if source == target {
            return Err(PathError::IdenticalEndpoints(source.id()));
        }

        let Some((ids, distance)) = shortest_path(&self.graph, source.id(), target.id()) else {
            warn!(source = %source.id(), target = %target.id(), "no path between stations");
            return Err(PathError::NoPathExists {
                from: source.id(),
                to: target.id(),
            });
        };

        let stations = ids
            .into_iter()
            .filter_map(|id| self.graph.station(id).cloned())
            .collect();

        debug!(source = %source.id(), target = %target.id(), distance, "found shortest path");

        Ok(ShortestPath { stations, distance })
    }

    pub fn graph(&self) -> &StationGraph {
        &self.graph
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Distance, LineId};
    use proptest::prelude::*;

    fn station(id: u64) -> Station {
        Station::new(StationId(id), format!("S{id}"))
    }

    fn snapshot(finder: &PathFinder) -> Vec<(StationId, Vec<(StationId, u32)>)> {
        let graph = finder.graph();
        graph
            .vertices()
            .map(|s| {
                let adjacent = graph.neighbors(s.id()).map(|(n, w)| (n, w.get())).collect();
                (s.id(), adjacent)
            })
            .collect()
    }

    /// A line through stations `0..n` in a random order with random distances.
    fn random_lines() -> impl Strategy<Value = Vec<Line>> {
        let line = (
            Just((0u64..8).collect::<Vec<_>>()).prop_shuffle(),
            proptest::collection::vec(1u32..20, 7),
            2usize..8,
        );
        proptest::collection::vec(line, 1..4).prop_map(|layouts| {
            layouts
                .into_iter()
                .enumerate()
                .map(|(i, (order, distances, len))| {
                    let mut line = Line::new(
                        LineId(i as u64),
                        format!("L{i}"),
                        "bg-blue-600",
                        station(order[0]),
                        station(order[1]),
                        Distance::new(distances[0]).unwrap(),
                    )
                    .unwrap();
                    for k in 1..len - 1 {
                        line.add_section(
                            station(order[k]),
                            station(order[k + 1]),
                            Distance::new(distances[k]).unwrap(),
                        )
                        .unwrap();
                    }
                    line
                })
                .collect()
        })
    }

    proptest! {
        /// Swapping source and target never changes the distance
        #[test]
        fn symmetric_distance(lines in random_lines(), a in 0u64..8, b in 0u64..8) {
            let finder = PathFinder::from_lines(&lines);
            let forward = finder.find_paths(&station(a), &station(b)).map(|p| p.distance());
            let backward = finder.find_paths(&station(b), &station(a)).map(|p| p.distance());
            match (forward, backward) {
                (Ok(there), Ok(back)) => prop_assert_eq!(there, back),
                (Err(there), Err(back)) => {
                    prop_assert_eq!(std::mem::discriminant(&there), std::mem::discriminant(&back));
                }
                (there, back) => prop_assert!(false, "asymmetric results {:?} / {:?}", there, back),
            }
        }

        /// The reported distance is the sum of the edges along the path
        #[test]
        fn distance_is_sum_of_edges(lines in random_lines(), a in 0u64..8, b in 0u64..8) {
            let finder = PathFinder::from_lines(&lines);
            if let Ok(path) = finder.find_paths(&station(a), &station(b)) {
                let walked: u64 = path
                    .stations()
                    .windows(2)
                    .map(|pair| {
                        finder
                            .graph()
                            .edge_weight(pair[0].id(), pair[1].id())
                            .map(|w| u64::from(w.get()))
                            .expect("consecutive path stations are connected")
                    })
                    .sum();
                prop_assert_eq!(walked, path.distance());
                prop_assert_eq!(path.source(), &station(a));
                prop_assert_eq!(path.target(), &station(b));
            }
        }

        /// Enrolling every line a second time changes nothing
        #[test]
        fn enrollment_is_idempotent(lines in random_lines()) {
            let once = PathFinder::from_lines(&lines);
            let twice = PathFinder::from_lines(lines.iter().chain(lines.iter()));
            prop_assert_eq!(snapshot(&once), snapshot(&twice));
        }
    }
}
