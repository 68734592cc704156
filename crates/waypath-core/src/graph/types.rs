use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{Result, WaypathError};

/// Node identity: an index in `[0, num_nodes)`
pub type NodeId = usize;

/// A directed, weighted edge. Parallel edges are allowed and kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: f64) -> Self {
        Edge { from, to, weight }
    }

    /// The same edge pointing the other way
    pub fn reversed(&self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

/// A node count plus an ordered edge list. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    num_nodes: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph without checking indices or weights; see [`Graph::validate`].
    pub fn new(num_nodes: usize, edges: Vec<Edge>) -> Self {
        Graph { num_nodes, edges }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Every edge flipped, weights and edge order preserved
    pub fn reverse(&self) -> Graph {
        Graph {
            num_nodes: self.num_nodes,
            edges: self.edges.iter().map(Edge::reversed).collect(),
        }
    }

    /// Edges leaving `node`, in edge-list order
    pub fn outbound(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |edge| edge.from == node)
    }

    /// Reject a node index outside `[0, num_nodes)`
    pub fn check_node(&self, role: &str, node: NodeId) -> Result<()> {
        if node < self.num_nodes {
            Ok(())
        } else {
            Err(WaypathError::invalid_node(role, node, self.num_nodes))
        }
    }

    /// Check every edge: endpoints in range, weights finite and non-negative
    pub fn validate(&self) -> Result<()> {
        for (i, edge) in self.edges.iter().enumerate() {
            self.check_node(&format!("edge {} source", i), edge.from)?;
            self.check_node(&format!("edge {} target", i), edge.to)?;

            if !edge.weight.is_finite() {
                bail_invalid!(&format!("weight on edge {}", i), edge.weight);
            }
            if edge.weight < 0.0 {
                return Err(WaypathError::NegativeWeight {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::demo;

    #[test]
    fn test_reverse_swaps_endpoints() {
        let graph = Graph::new(3, vec![Edge::new(0, 1, 2.0), Edge::new(1, 2, 5.0)]);
        let reversed = graph.reverse();

        assert_eq!(reversed.num_nodes(), 3);
        assert_eq!(
            reversed.edges(),
            &[Edge::new(1, 0, 2.0), Edge::new(2, 1, 5.0)]
        );
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let graph = demo::graph();
        assert_eq!(graph.reverse().reverse(), graph);
    }

    #[test]
    fn test_outbound_keeps_parallel_edges_in_order() {
        let graph = demo::graph();
        let from_two: Vec<_> = graph.outbound(2).copied().collect();

        assert_eq!(
            from_two,
            vec![
                Edge::new(2, 1, 1.0),
                Edge::new(2, 3, 3.0),
                Edge::new(2, 3, 4.0)
            ]
        );
        assert_eq!(graph.outbound(5).count(), 0);
    }

    #[test]
    fn test_validate_demo_graph() {
        assert!(demo::graph().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_endpoint() {
        let graph = Graph::new(2, vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)]);
        let err = graph.validate().unwrap_err();

        match err {
            WaypathError::InvalidNodeIndex {
                node, num_nodes, ..
            } => {
                assert_eq!(node, 2);
                assert_eq!(num_nodes, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let graph = Graph::new(2, vec![Edge::new(0, 1, -1.0)]);
        assert!(matches!(
            graph.validate(),
            Err(WaypathError::NegativeWeight { from: 0, to: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_weight() {
        let graph = Graph::new(2, vec![Edge::new(0, 1, f64::NAN)]);
        assert!(matches!(
            graph.validate(),
            Err(WaypathError::InvalidValue { .. })
        ));
    }
}
