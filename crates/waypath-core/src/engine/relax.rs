use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::{DistanceVector, Graph, NodeId};

use super::observer::{Relaxation, TraversalObserver};

/// What a single call to [`Relaxer::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The node was processed: visited and its outbound edges relaxed
    Visited(NodeId),
    /// The node had already been processed; its queue entry was dropped
    Skipped(NodeId),
    /// The queue is empty
    Finished,
}

/// Single-source relaxation driven one queue entry at a time.
///
/// The queue is plain FIFO, not a priority queue: nodes are processed in
/// discovery order, and every examined edge enqueues its target whether or
/// not the distance improved. A node is processed at most once; later queue
/// entries for it come back as [`StepOutcome::Skipped`].
#[derive(Debug)]
pub struct Relaxer<'g> {
    graph: &'g Graph,
    source: NodeId,
    dist: DistanceVector,
    visited: HashSet<NodeId>,
    queue: VecDeque<NodeId>,
    visits: usize,
}

impl<'g> Relaxer<'g> {
    pub fn new(graph: &'g Graph, source: NodeId) -> Result<Self> {
        graph.validate()?;
        graph.check_node("source", source)?;

        Ok(Relaxer {
            graph,
            source,
            dist: DistanceVector::new(graph.num_nodes(), source),
            visited: HashSet::new(),
            queue: VecDeque::from([source]),
            visits: 0,
        })
    }

    pub fn step<O: TraversalObserver + ?Sized>(&mut self, observer: &mut O) -> StepOutcome {
        let Some(node) = self.queue.pop_front() else {
            return StepOutcome::Finished;
        };

        if !self.visited.insert(node) {
            return StepOutcome::Skipped(node);
        }
        self.visits += 1;

        let current = self.dist.get(node);
        observer.on_visit(node, current);

        for edge in self.graph.outbound(node) {
            let updated = self.dist.relax(edge.to, current + edge.weight);
            observer.on_relax(&Relaxation {
                from: node,
                to: edge.to,
                weight: edge.weight,
                distance: self.dist.get(edge.to),
                updated,
            });
            self.queue.push_back(edge.to);
        }

        StepOutcome::Visited(node)
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn distances(&self) -> &DistanceVector {
        &self.dist
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    /// Pending queue entries, stale ones included
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Number of nodes processed so far
    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn finish(self) -> DistanceVector {
        self.dist
    }
}
