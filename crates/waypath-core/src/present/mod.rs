//! Presentation collaborators driven by engine callbacks
//!
//! - `event_log`: synchronous in-memory log buffer
//! - `diagram`: node/edge colouring and SVG snapshot

pub mod diagram;
pub mod event_log;

pub use diagram::{Diagram, DEFAULT_EDGE_STROKE, DEFAULT_NODE_FILL};
pub use event_log::{EventLog, TraceEvent};
