//! Streams engine progress to stdout as it happens

use waypath_core::engine::{Phase, Relaxation, TraversalObserver};
use waypath_core::graph::{Distance, NodeId};
use waypath_core::present::TraceEvent;

/// Prints each log line the moment it is produced. Silent when `quiet`.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    quiet: bool,
}

impl Printer {
    pub fn new(quiet: bool) -> Self {
        Printer { quiet }
    }

    fn emit(&self, event: TraceEvent) {
        if self.quiet {
            return;
        }
        if let Some(line) = event.line() {
            println!("{}", line);
        }
    }
}

impl TraversalObserver for Printer {
    fn on_phase(&mut self, phase: Phase) {
        tracing::debug!(phase = phase.label(), "phase_start");
    }

    fn on_visit(&mut self, node: NodeId, distance: Distance) {
        self.emit(TraceEvent::Visit { node, distance });
    }

    fn on_relax(&mut self, relaxation: &Relaxation) {
        self.emit(TraceEvent::Relax(*relaxation));
    }

    fn log_line(&mut self, text: &str) {
        self.emit(TraceEvent::Message {
            text: text.to_string(),
        });
    }
}
