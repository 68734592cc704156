//! Start/reset surface for an interactive front end.
//!
//! A [`Session`] owns the presentation state (log buffer and diagram) and at
//! most one in-flight computation. Starting a new computation or resetting
//! cancels the previous one, and a superseded run never writes into the
//! presentation again.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::JoinHandle;

use crate::engine::{CancelHandle, Pacing, Phase, Relaxation, TraversalObserver};
use crate::error::Result;
use crate::graph::{Distance, Graph, Layout, NodeId};
use crate::present::{Diagram, EventLog, TraceEvent};
use crate::waypoint::{compute_minimum_waypoint_weight, WaypointQuery, WaypointReport};

#[derive(Debug)]
struct Shared {
    generation: u64,
    log: EventLog,
    diagram: Diagram,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Observer handed to one run; drops its writes once the session moves on
struct SessionObserver {
    shared: Arc<Mutex<Shared>>,
    generation: u64,
}

impl SessionObserver {
    fn with(&self, f: impl FnOnce(&mut EventLog, &mut Diagram)) {
        let mut shared = lock(&self.shared);
        if shared.generation == self.generation {
            let Shared { log, diagram, .. } = &mut *shared;
            f(log, diagram);
        }
    }
}

impl TraversalObserver for SessionObserver {
    fn on_phase(&mut self, phase: Phase) {
        self.with(|log, diagram| {
            log.on_phase(phase);
            diagram.on_phase(phase);
        });
    }

    fn on_visit(&mut self, node: NodeId, distance: Distance) {
        self.with(|log, diagram| {
            log.on_visit(node, distance);
            diagram.on_visit(node, distance);
        });
    }

    fn on_relax(&mut self, relaxation: &Relaxation) {
        self.with(|log, diagram| {
            log.on_relax(relaxation);
            diagram.on_relax(relaxation);
        });
    }

    fn log_line(&mut self, text: &str) {
        self.with(|log, _| log.log_line(text));
    }
}

#[derive(Debug)]
pub struct Session {
    graph: Arc<Graph>,
    pacing: Pacing,
    shared: Arc<Mutex<Shared>>,
    active: Option<CancelHandle>,
}

impl Session {
    pub fn new(graph: Graph, layout: Layout, pacing: Pacing) -> Self {
        let diagram = Diagram::new(graph.clone(), layout);
        Session {
            graph: Arc::new(graph),
            pacing,
            shared: Arc::new(Mutex::new(Shared {
                generation: 0,
                log: EventLog::new(),
                diagram,
            })),
            active: None,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Validate `query`, clear the previous run and spawn a new one.
    ///
    /// Must be called from within a tokio runtime. Validation errors are
    /// returned here, before anything is cleared or spawned.
    pub fn start(&mut self, query: WaypointQuery) -> Result<JoinHandle<Result<WaypointReport>>> {
        self.graph.validate()?;
        query.validate(&self.graph)?;

        let generation = self.clear();
        let handle = CancelHandle::new();
        let token = handle.token();
        self.active = Some(handle);

        tracing::debug!(generation, ?query, "session_start");

        let graph = Arc::clone(&self.graph);
        let pacing = self.pacing;
        let mut observer = SessionObserver {
            shared: Arc::clone(&self.shared),
            generation,
        };

        Ok(tokio::spawn(async move {
            compute_minimum_waypoint_weight(&graph, query, pacing, &mut observer, &token).await
        }))
    }

    /// Cancel any in-flight run and clear the log and diagram
    pub fn reset(&mut self) {
        let generation = self.clear();
        tracing::debug!(generation, "session_reset");
    }

    fn clear(&mut self) -> u64 {
        if let Some(handle) = self.active.take() {
            handle.cancel();
        }
        let mut shared = lock(&self.shared);
        shared.generation += 1;
        shared.log.clear();
        shared.diagram.reset();
        shared.generation
    }

    pub fn log_lines(&self) -> Vec<String> {
        lock(&self.shared).log.lines()
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        lock(&self.shared).log.events().to_vec()
    }

    pub fn svg(&self) -> String {
        lock(&self.shared).diagram.to_svg()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaypathError;
    use crate::graph::demo;
    use std::time::Duration;

    fn demo_session(pacing: Pacing) -> Session {
        Session::new(demo::graph(), demo::layout(), pacing)
    }

    #[tokio::test]
    async fn test_run_fills_log_and_diagram() {
        let mut session = demo_session(Pacing::INSTANT);
        let report = session.start(demo::QUERY).unwrap().await.unwrap().unwrap();

        assert_eq!(report.minimum, Distance::new(9.0));
        let lines = session.log_lines();
        assert_eq!(lines.last().unwrap(), "Final minimum weight: 9");
        // The reverse run is the last to touch node 0
        assert!(session.svg().contains(r#"id="node-0" cx="100" cy="100" r="20" fill="red""#));
    }

    #[tokio::test]
    async fn test_reset_leaves_no_residue() {
        let mut session = demo_session(Pacing::INSTANT);
        let first = session.start(demo::QUERY).unwrap().await.unwrap().unwrap();
        let first_lines = session.log_lines();
        let pristine_svg = demo_session(Pacing::INSTANT).svg();

        session.reset();
        assert!(session.log_lines().is_empty());
        assert!(session.events().is_empty());
        assert_eq!(session.svg(), pristine_svg);

        let second = session.start(demo::QUERY).unwrap().await.unwrap().unwrap();
        assert_eq!(first, second);
        assert_eq!(first_lines, session.log_lines());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_in_flight_run() {
        let mut session = demo_session(Pacing::from_millis(1000));
        let running = session.start(demo::QUERY).unwrap();

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(!session.log_lines().is_empty());

        session.reset();
        let result = running.await.unwrap();
        assert!(matches!(result, Err(WaypathError::Cancelled)));
        assert!(session.log_lines().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_supersedes_previous_run() {
        let mut session = demo_session(Pacing::from_millis(1000));
        let first = session.start(demo::QUERY).unwrap();
        tokio::time::sleep(Duration::from_millis(1500)).await;

        let second = session
            .start(WaypointQuery {
                src1: 1,
                src2: 0,
                dest: 5,
            })
            .unwrap();

        assert!(matches!(first.await.unwrap(), Err(WaypathError::Cancelled)));
        let report = second.await.unwrap().unwrap();
        assert_eq!(report.minimum, Distance::new(9.0));

        let lines = session.log_lines();
        assert_eq!(lines[0], "Starting relaxation from src1: 1");
        assert_eq!(
            lines
                .iter()
                .filter(|line| line.starts_with("Starting relaxation from src1"))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_start_rejects_invalid_query_without_clearing() {
        let mut session = demo_session(Pacing::INSTANT);
        session.start(demo::QUERY).unwrap().await.unwrap().unwrap();
        let before = session.log_lines();

        let err = session
            .start(WaypointQuery {
                src1: 0,
                src2: 7,
                dest: 5,
            })
            .unwrap_err();
        assert!(matches!(err, WaypathError::InvalidNodeIndex { .. }));
        assert_eq!(session.log_lines(), before);
    }
}
