//! The built-in six-node demo graph and its layout.

use super::{Edge, Graph, Layout, Position};
use crate::waypoint::WaypointQuery;

pub const NUM_NODES: usize = 6;

/// Default query: meet 0 and 1 on the way to 5
pub const QUERY: WaypointQuery = WaypointQuery {
    src1: 0,
    src2: 1,
    dest: 5,
};

pub fn edges() -> Vec<Edge> {
    vec![
        Edge::new(0, 2, 2.0),
        Edge::new(0, 5, 6.0),
        Edge::new(1, 0, 3.0),
        Edge::new(1, 4, 5.0),
        Edge::new(2, 1, 1.0),
        Edge::new(2, 3, 3.0),
        Edge::new(2, 3, 4.0),
        Edge::new(3, 4, 2.0),
        Edge::new(4, 5, 1.0),
    ]
}

pub fn graph() -> Graph {
    Graph::new(NUM_NODES, edges())
}

pub fn layout() -> Layout {
    Layout::new(vec![
        Position::new(100.0, 100.0),
        Position::new(300.0, 100.0),
        Position::new(100.0, 300.0),
        Position::new(300.0, 300.0),
        Position::new(200.0, 500.0),
        Position::new(500.0, 300.0),
    ])
}
