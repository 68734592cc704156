use serde::Serialize;

use crate::graph::{Distance, NodeId};

/// Which of the three runs of a waypoint computation is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Forward run from the first source
    FromFirstSource,
    /// Forward run from the second source
    FromSecondSource,
    /// Run from the destination over the reversed graph
    ToDestination,
}

impl Phase {
    pub fn is_reverse(&self) -> bool {
        matches!(self, Phase::ToDestination)
    }

    /// Short name used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            Phase::FromFirstSource => "src1",
            Phase::FromSecondSource => "src2",
            Phase::ToDestination => "dest",
        }
    }
}

/// One outbound edge examined while processing a node.
///
/// Reported for every edge of a processed node, whether or not the
/// distance to `to` went down; `distance` is the value after the check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Relaxation {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
    pub distance: Distance,
    pub updated: bool,
}

/// Receives the observable side effects of a run: node visits, edge
/// relaxations and free-form progress lines.
pub trait TraversalObserver {
    /// A new run is about to start
    fn on_phase(&mut self, _phase: Phase) {}

    fn on_visit(&mut self, node: NodeId, distance: Distance);

    fn on_relax(&mut self, relaxation: &Relaxation);

    fn log_line(&mut self, text: &str);
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TraversalObserver for NoopObserver {
    fn on_visit(&mut self, _node: NodeId, _distance: Distance) {}

    fn on_relax(&mut self, _relaxation: &Relaxation) {}

    fn log_line(&mut self, _text: &str) {}
}

impl<O: TraversalObserver + ?Sized> TraversalObserver for &mut O {
    fn on_phase(&mut self, phase: Phase) {
        (**self).on_phase(phase)
    }

    fn on_visit(&mut self, node: NodeId, distance: Distance) {
        (**self).on_visit(node, distance)
    }

    fn on_relax(&mut self, relaxation: &Relaxation) {
        (**self).on_relax(relaxation)
    }

    fn log_line(&mut self, text: &str) {
        (**self).log_line(text)
    }
}

/// Fan out to two observers, first `A` then `B`
impl<A: TraversalObserver, B: TraversalObserver> TraversalObserver for (A, B) {
    fn on_phase(&mut self, phase: Phase) {
        self.0.on_phase(phase);
        self.1.on_phase(phase);
    }

    fn on_visit(&mut self, node: NodeId, distance: Distance) {
        self.0.on_visit(node, distance);
        self.1.on_visit(node, distance);
    }

    fn on_relax(&mut self, relaxation: &Relaxation) {
        self.0.on_relax(relaxation);
        self.1.on_relax(relaxation);
    }

    fn log_line(&mut self, text: &str) {
        self.0.log_line(text);
        self.1.log_line(text);
    }
}
