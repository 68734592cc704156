//! Configuration for waypath
//!
//! Read from `waypath.toml` in the working directory, from the file named by
//! `WAYPATH_CONFIG`, or from an explicit `--config` path. Every field is
//! optional; anything missing falls back to the built-in demo.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::engine::Pacing;
use crate::error::{Result, WaypathError};
use crate::graph::{demo, Edge, Graph, Layout, Position};
use crate::waypoint::WaypointQuery;

pub const CONFIG_FILE: &str = "waypath.toml";
pub const CONFIG_ENV_VAR: &str = "WAYPATH_CONFIG";

fn default_step_delay_ms() -> u64 {
    2000
}

fn default_query() -> WaypointQuery {
    demo::QUERY
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypathConfig {
    /// Pause after each processed node, in milliseconds
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,

    /// Node count; inferred from the edges when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_nodes: Option<usize>,

    /// Edge list; the demo graph when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<Edge>>,

    /// Node positions for the diagram
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<Position>>,

    #[serde(default = "default_query")]
    pub query: WaypointQuery,
}

impl Default for WaypathConfig {
    fn default() -> Self {
        WaypathConfig {
            step_delay_ms: default_step_delay_ms(),
            num_nodes: None,
            edges: None,
            positions: None,
            query: default_query(),
        }
    }
}

impl WaypathConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(WaypathError::ConfigNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        let config: WaypathConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path or `WAYPATH_CONFIG` must exist; `waypath.toml` in
    /// `dir` is optional.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load(&PathBuf::from(path));
        }

        let local = dir.join(CONFIG_FILE);
        if local.is_file() {
            Self::load(&local)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaypathError::failed("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn pacing(&self) -> Pacing {
        Pacing::from_millis(self.step_delay_ms)
    }

    /// The configured graph, validated
    pub fn graph(&self) -> Result<Graph> {
        let graph = match (&self.edges, self.num_nodes) {
            (None, None) => demo::graph(),
            (None, Some(n)) => bail_invalid!("num_nodes without edges", n),
            (Some(edges), num_nodes) => {
                let inferred = edges
                    .iter()
                    .map(|e| e.from.max(e.to) + 1)
                    .max()
                    .unwrap_or(0);
                Graph::new(num_nodes.unwrap_or(inferred), edges.clone())
            }
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Node positions for `graph`: configured, the demo layout, or a circle
    pub fn layout(&self, graph: &Graph) -> Result<Layout> {
        match &self.positions {
            Some(positions) if positions.len() != graph.num_nodes() => bail_invalid!(
                "positions",
                format!(
                    "{} positions for {} nodes",
                    positions.len(),
                    graph.num_nodes()
                )
            ),
            Some(positions) => Ok(Layout::new(positions.clone())),
            None if self.edges.is_none() => Ok(demo::layout()),
            None => Ok(Layout::circular(graph.num_nodes())),
        }
    }
}
