//! Step-animated single-source shortest paths
//!
//! - `relax`: the FIFO relaxation step machine
//! - `observer`: the visit/relax/log callback interface
//! - `pacing`: per-step delay
//! - `cancel`: cancellation tokens for in-flight runs

pub mod cancel;
pub mod observer;
pub mod pacing;
pub mod relax;

use std::time::Instant;

use crate::error::Result;
use crate::graph::{DistanceVector, Graph, NodeId};
use crate::trace_time;

pub use cancel::{CancelHandle, CancelToken};
pub use observer::{NoopObserver, Phase, Relaxation, TraversalObserver};
pub use pacing::{Pacing, DEFAULT_STEP_DELAY};
pub use relax::{Relaxer, StepOutcome};

/// Run the relaxation from `source` to completion, pausing for the step
/// delay after every processed node.
///
/// Skipped (already processed) queue entries cost no delay. The run stops
/// with `Cancelled` as soon as `cancel` fires, without further observer
/// calls.
#[tracing::instrument(skip(graph, pacing, observer, cancel), fields(num_nodes = graph.num_nodes(), edges = graph.edges().len()))]
pub async fn run<O: TraversalObserver + ?Sized>(
    graph: &Graph,
    source: NodeId,
    pacing: Pacing,
    observer: &mut O,
    cancel: &CancelToken,
) -> Result<DistanceVector> {
    let start = Instant::now();
    let mut relaxer = Relaxer::new(graph, source)?;
    let mut cancel = cancel.clone();

    loop {
        cancel.check()?;

        match relaxer.step(&mut *observer) {
            StepOutcome::Finished => break,
            StepOutcome::Skipped(node) => {
                tracing::trace!(node, "skip_visited");
            }
            StepOutcome::Visited(node) => {
                tracing::debug!(
                    node,
                    distance = %relaxer.distances().get(node),
                    queued = relaxer.queued(),
                    "visit"
                );
                pacing.wait(&mut cancel).await?;
            }
        }
    }

    trace_time!(start, "relaxation_run", visits = relaxer.visits());
    Ok(relaxer.finish())
}

/// Distances from `source` with no observer and no delay
pub fn shortest_distances(graph: &Graph, source: NodeId) -> Result<DistanceVector> {
    let mut relaxer = Relaxer::new(graph, source)?;
    let mut observer = NoopObserver;
    while relaxer.step(&mut observer) != StepOutcome::Finished {}
    Ok(relaxer.finish())
}
