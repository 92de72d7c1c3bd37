//! Shortest-path search across the whole network.
//!
//! Every line's sections are merged into one weighted station graph, and
//! queries run Dijkstra over it. Edge weights are section distances; a
//! section may be traversed in either direction.

mod dijkstra;
mod finder;
mod graph;

pub use dijkstra::shortest_path;
pub use finder::{PathError, PathFinder, ShortestPath};
pub use graph::StationGraph;
