use std::fmt::Write as _;

use crate::engine::{Phase, Relaxation, TraversalObserver};
use crate::graph::{Distance, Graph, Layout, NodeId};

pub const DEFAULT_NODE_FILL: &str = "#3498db";
pub const DEFAULT_EDGE_STROKE: &str = "white";
const WEIGHT_LABEL_FILL: &str = "yellow";
const NODE_LABEL_FILL: &str = "white";
const FONT_SIZE: u32 = 16;

/// Colours for one kind of run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    visited: &'static str,
    examined: &'static str,
}

const FORWARD: Palette = Palette {
    visited: "green",
    examined: "yellow",
};

const REVERSE: Palette = Palette {
    visited: "red",
    examined: "orange",
};

/// Visual state of the graph as a run progresses.
///
/// Reverse-phase relaxations arrive with flipped endpoints and are mapped
/// back onto the original edges they came from.
#[derive(Debug, Clone)]
pub struct Diagram {
    graph: Graph,
    layout: Layout,
    node_fill: Vec<&'static str>,
    edge_stroke: Vec<&'static str>,
    reverse: bool,
}

impl Diagram {
    pub fn new(graph: Graph, layout: Layout) -> Self {
        let node_fill = vec![DEFAULT_NODE_FILL; graph.num_nodes()];
        let edge_stroke = vec![DEFAULT_EDGE_STROKE; graph.edges().len()];
        Diagram {
            graph,
            layout,
            node_fill,
            edge_stroke,
            reverse: false,
        }
    }

    pub fn node_fill(&self, node: NodeId) -> Option<&'static str> {
        self.node_fill.get(node).copied()
    }

    pub fn edge_stroke(&self, edge_index: usize) -> Option<&'static str> {
        self.edge_stroke.get(edge_index).copied()
    }

    /// Back to the freshly drawn state
    pub fn reset(&mut self) {
        self.node_fill.fill(DEFAULT_NODE_FILL);
        self.edge_stroke.fill(DEFAULT_EDGE_STROKE);
        self.reverse = false;
    }

    fn palette(&self) -> Palette {
        if self.reverse {
            REVERSE
        } else {
            FORWARD
        }
    }

    pub fn to_svg(&self) -> String {
        let extent = self.layout.extent();
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="background:#222">"#,
            extent.x, extent.y
        );

        for (i, edge) in self.graph.edges().iter().enumerate() {
            let (Some(from), Some(to)) =
                (self.layout.position(edge.from), self.layout.position(edge.to))
            else {
                continue;
            };
            let _ = writeln!(
                svg,
                r#"  <line id="edge-{}-{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="2"/>"#,
                edge.from, edge.to, from.x, from.y, to.x, to.y, self.edge_stroke[i]
            );
            let mid = from.midpoint(&to);
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" fill="{}" font-size="{}">{}</text>"#,
                mid.x,
                mid.y,
                WEIGHT_LABEL_FILL,
                FONT_SIZE,
                Distance::new(edge.weight)
            );
        }

        for (node, fill) in self.node_fill.iter().enumerate() {
            let Some(pos) = self.layout.position(node) else {
                continue;
            };
            let _ = writeln!(
                svg,
                r#"  <circle id="node-{}" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                node,
                pos.x,
                pos.y,
                self.layout.node_radius(),
                fill
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" fill="{}" font-size="{}" text-anchor="middle" alignment-baseline="middle">{}</text>"#,
                pos.x, pos.y, NODE_LABEL_FILL, FONT_SIZE, node
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl TraversalObserver for Diagram {
    fn on_phase(&mut self, phase: Phase) {
        self.reverse = phase.is_reverse();
    }

    fn on_visit(&mut self, node: NodeId, _distance: Distance) {
        let colour = self.palette().visited;
        if let Some(fill) = self.node_fill.get_mut(node) {
            *fill = colour;
        }
    }

    fn on_relax(&mut self, relaxation: &Relaxation) {
        let (from, to) = if self.reverse {
            (relaxation.to, relaxation.from)
        } else {
            (relaxation.from, relaxation.to)
        };
        let colour = self.palette().examined;

        for (edge, stroke) in self.graph.edges().iter().zip(self.edge_stroke.iter_mut()) {
            if edge.from == from && edge.to == to {
                *stroke = colour;
            }
        }
    }

    fn log_line(&mut self, _text: &str) {}
}
