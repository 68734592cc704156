use serde::Serialize;

use crate::engine::{Phase, Relaxation, TraversalObserver};
use crate::graph::{Distance, NodeId};

/// One observable side effect of a computation, in emission order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    Phase { phase: Phase },
    Visit { node: NodeId, distance: Distance },
    Relax(Relaxation),
    Message { text: String },
}

impl TraceEvent {
    /// The log line this event contributes, if any.
    ///
    /// Relaxations that left the distance unchanged are silent.
    pub fn line(&self) -> Option<String> {
        match self {
            TraceEvent::Phase { .. } => None,
            TraceEvent::Visit { node, distance } => Some(format!(
                "Visiting node {} with current distance {}",
                node, distance
            )),
            TraceEvent::Relax(r) if r.updated => {
                Some(format!("Updated distance to node {}: {}", r.to, r.distance))
            }
            TraceEvent::Relax(_) => None,
            TraceEvent::Message { text } => Some(text.clone()),
        }
    }
}

/// In-memory log buffer. Appends happen synchronously as events arrive.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<TraceEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn lines(&self) -> Vec<String> {
        self.events.iter().filter_map(TraceEvent::line).collect()
    }

    /// Processed nodes, in order
    pub fn visits(&self) -> Vec<NodeId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Visit { node, .. } => Some(*node),
                _ => None,
            })
            .collect()
    }

    pub fn relaxations(&self) -> impl Iterator<Item = &Relaxation> + '_ {
        self.events.iter().filter_map(|event| match event {
            TraceEvent::Relax(r) => Some(r),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl TraversalObserver for EventLog {
    fn on_phase(&mut self, phase: Phase) {
        self.push(TraceEvent::Phase { phase });
    }

    fn on_visit(&mut self, node: NodeId, distance: Distance) {
        self.push(TraceEvent::Visit { node, distance });
    }

    fn on_relax(&mut self, relaxation: &Relaxation) {
        self.push(TraceEvent::Relax(*relaxation));
    }

    fn log_line(&mut self, text: &str) {
        self.push(TraceEvent::Message {
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_skip_unchanged_relaxations() {
        let mut log = EventLog::new();
        log.on_visit(2, Distance::new(2.0));
        log.on_relax(&Relaxation {
            from: 2,
            to: 3,
            weight: 3.0,
            distance: Distance::new(5.0),
            updated: true,
        });
        log.on_relax(&Relaxation {
            from: 2,
            to: 3,
            weight: 4.0,
            distance: Distance::new(5.0),
            updated: false,
        });
        log.log_line("done");

        assert_eq!(
            log.lines(),
            vec![
                "Visiting node 2 with current distance 2",
                "Updated distance to node 3: 5",
                "done",
            ]
        );
        assert_eq!(log.relaxations().count(), 2);
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut log = EventLog::new();
        log.on_phase(Phase::FromFirstSource);
        log.log_line("hello");
        assert_eq!(log.len(), 2);

        log.clear();
        assert!(log.is_empty());
        assert!(log.lines().is_empty());
    }

    #[test]
    fn test_event_json_shape() {
        let event = TraceEvent::Visit {
            node: 4,
            distance: Distance::INFINITY,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "visit");
        assert_eq!(json["node"], 4);
        assert!(json["distance"].is_null());
    }
}
