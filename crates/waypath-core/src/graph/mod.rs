//! Graph model for waypath
//!
//! - `types`: nodes, edges and the immutable graph (with reversal)
//! - `distance`: distances and per-run distance vectors
//! - `layout`: node positions for the diagram
//! - `demo`: the built-in demo graph

pub mod demo;
pub mod distance;
pub mod layout;
pub mod types;

pub use distance::{Distance, DistanceVector};
pub use layout::{Layout, Position, NODE_RADIUS};
pub use types::{Edge, Graph, NodeId};
