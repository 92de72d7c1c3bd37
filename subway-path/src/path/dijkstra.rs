//! Single-source shortest path over a [`StationGraph`].

use pathfinding::prelude::dijkstra;
use tracing::trace;

use super::graph::StationGraph;
use crate::domain::StationId;

/// Runs Dijkstra from `source` and returns the station ids along the
/// shortest path to `target` together with its total weight.
///
/// Returns `None` when `target` cannot be reached. All weights are positive
/// section distances, so the search stops as soon as `target` is settled.
pub fn shortest_path(
    graph: &StationGraph,
    source: StationId,
    target: StationId,
) -> Option<(Vec<StationId>, u64)> {
    let result = dijkstra(
        &source,
        |id| {
            graph
                .neighbors(*id)
                .map(|(next, weight)| (next, u64::from(weight.get())))
        },
        |id| *id == target,
    );

    trace!(
        source = %source,
        target = %target,
        found = result.is_some(),
        "dijkstra finished"
    );

    result
}
