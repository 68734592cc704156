use serde::{Deserialize, Serialize};

use super::NodeId;

/// Radius of a node circle in the diagram
pub const NODE_RADIUS: f64 = 20.0;

/// Where a node is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    pub fn midpoint(&self, other: &Position) -> Position {
        Position {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Display positions for every node of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    positions: Vec<Position>,
    #[serde(default = "default_radius")]
    node_radius: f64,
}

fn default_radius() -> f64 {
    NODE_RADIUS
}

impl Layout {
    pub fn new(positions: Vec<Position>) -> Self {
        Layout {
            positions,
            node_radius: NODE_RADIUS,
        }
    }

    /// Nodes on a circle, for graphs that come without positions
    pub fn circular(num_nodes: usize) -> Self {
        let center = 300.0;
        let radius = 200.0;
        let positions = (0..num_nodes)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / num_nodes.max(1) as f64;
                Position::new(center + radius * angle.cos(), center + radius * angle.sin())
            })
            .collect();
        Layout::new(positions)
    }

    pub fn position(&self, node: NodeId) -> Option<Position> {
        self.positions.get(node).copied()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn node_radius(&self) -> f64 {
        self.node_radius
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Bottom-right corner of the drawing, padded by one node diameter
    pub fn extent(&self) -> Position {
        let pad = self.node_radius * 2.0;
        self.positions.iter().fold(Position::new(pad, pad), |acc, p| {
            Position::new(acc.x.max(p.x + pad), acc.y.max(p.y + pad))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let mid = Position::new(100.0, 100.0).midpoint(&Position::new(300.0, 300.0));
        assert_eq!(mid, Position::new(200.0, 200.0));
    }

    #[test]
    fn test_circular_layout_has_one_position_per_node() {
        let layout = Layout::circular(5);
        assert_eq!(layout.len(), 5);
        assert!(layout.position(4).is_some());
        assert!(layout.position(5).is_none());
    }

    #[test]
    fn test_extent_covers_all_nodes() {
        let layout = Layout::new(vec![Position::new(100.0, 100.0), Position::new(500.0, 300.0)]);
        assert_eq!(layout.extent(), Position::new(540.0, 340.0));
    }
}
