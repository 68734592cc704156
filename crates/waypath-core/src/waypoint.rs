//! Minimum combined weight through a common waypoint
//!
//! Two sources and one destination: run the engine from each source over the
//! graph, then from the destination over the reversed graph, and pick the
//! node whose three distances sum lowest.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::engine::{self, CancelToken, Pacing, Phase, TraversalObserver};
use crate::error::Result;
use crate::graph::{Distance, DistanceVector, Graph, NodeId};
use crate::trace_time;

/// Two origins that should converge on their way to one destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointQuery {
    pub src1: NodeId,
    pub src2: NodeId,
    pub dest: NodeId,
}

impl WaypointQuery {
    /// Reject any endpoint outside the graph
    pub fn validate(&self, graph: &Graph) -> Result<()> {
        graph.check_node("src1", self.src1)?;
        graph.check_node("src2", self.src2)?;
        graph.check_node("dest", self.dest)
    }

    /// The same query with the two sources exchanged
    pub fn swapped(&self) -> Self {
        WaypointQuery {
            src1: self.src2,
            src2: self.src1,
            dest: self.dest,
        }
    }
}

/// The three distance components through one pivot node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaypointCandidate {
    pub node: NodeId,
    pub from_src1: Distance,
    pub from_src2: Distance,
    pub to_dest: Distance,
    pub combined: Distance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaypointReport {
    pub query: WaypointQuery,
    pub from_src1: DistanceVector,
    pub from_src2: DistanceVector,
    pub to_dest: DistanceVector,
    pub candidates: Vec<WaypointCandidate>,
    pub minimum: Distance,
    /// First node reaching a finite minimum
    pub pivot: Option<NodeId>,
}

/// Graph and query validation, then the three sequential runs.
///
/// Every violation is reported before the first run starts; each run
/// finishes before the next begins.
#[tracing::instrument(skip(graph, query, pacing, observer, cancel), fields(src1 = query.src1, src2 = query.src2, dest = query.dest))]
pub async fn compute_minimum_waypoint_weight<O: TraversalObserver + ?Sized>(
    graph: &Graph,
    query: WaypointQuery,
    pacing: Pacing,
    observer: &mut O,
    cancel: &CancelToken,
) -> Result<WaypointReport> {
    graph.validate()?;
    query.validate(graph)?;

    let start = Instant::now();

    observer.on_phase(Phase::FromFirstSource);
    observer.log_line(&format!("Starting relaxation from src1: {}", query.src1));
    let from_src1 = engine::run(graph, query.src1, pacing, &mut *observer, cancel).await?;
    observer.log_line(&format!(
        "Shortest paths from src1 completed. Distances: {}",
        from_src1
    ));

    observer.on_phase(Phase::FromSecondSource);
    observer.log_line(&format!("Starting relaxation from src2: {}", query.src2));
    let from_src2 = engine::run(graph, query.src2, pacing, &mut *observer, cancel).await?;
    observer.log_line(&format!(
        "Shortest paths from src2 completed. Distances: {}",
        from_src2
    ));

    observer.on_phase(Phase::ToDestination);
    observer.log_line(&format!(
        "Starting relaxation to dest (reverse graph): {}",
        query.dest
    ));
    let reversed = graph.reverse();
    let to_dest = engine::run(&reversed, query.dest, pacing, &mut *observer, cancel).await?;
    observer.log_line(&format!(
        "Shortest paths to dest completed. Distances: {}",
        to_dest
    ));

    let report = combine(query, from_src1, from_src2, to_dest, &mut *observer);
    observer.log_line(&format!("Final minimum weight: {}", report.minimum));

    trace_time!(start, "waypoint_search");
    tracing::info!(minimum = %report.minimum, pivot = ?report.pivot, "waypoint_found");

    Ok(report)
}

/// Sum the three distances per node and keep the first strict minimum
pub fn combine<O: TraversalObserver + ?Sized>(
    query: WaypointQuery,
    from_src1: DistanceVector,
    from_src2: DistanceVector,
    to_dest: DistanceVector,
    observer: &mut O,
) -> WaypointReport {
    let mut minimum = Distance::INFINITY;
    let mut pivot = None;

    let candidates: Vec<WaypointCandidate> = (0..from_src1.len())
        .map(|node| {
            let d1 = from_src1.get(node);
            let d2 = from_src2.get(node);
            let d3 = to_dest.get(node);
            let combined = d1 + d2 + d3;

            observer.log_line(&format!("Node {}: d1 = {}, d2 = {}, d3 = {}", node, d1, d2, d3));
            observer.log_line(&format!("  -> Combined distance: {}", combined));

            if combined < minimum {
                minimum = combined;
                pivot = Some(node);
            }

            WaypointCandidate {
                node,
                from_src1: d1,
                from_src2: d2,
                to_dest: d3,
                combined,
            }
        })
        .collect();

    WaypointReport {
        query,
        from_src1,
        from_src2,
        to_dest,
        candidates,
        minimum,
        pivot,
    }
}
