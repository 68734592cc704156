//! CLI argument parsing for waypath
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use waypath_core::format::OutputFormat;
use waypath_core::graph::NodeId;

use parse::parse_format;

/// Waypath - step-animated shortest paths and common-waypoint search
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./waypath.toml or $WAYPATH_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress step-by-step output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. `trace`, `waypath_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the cheapest node where two sources meet on the way to a destination
    Run {
        /// First source node
        #[arg(long)]
        src1: Option<NodeId>,

        /// Second source node
        #[arg(long)]
        src2: Option<NodeId>,

        /// Destination node
        #[arg(long)]
        dest: Option<NodeId>,

        /// Pause after each processed node, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Write the final diagram as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Shortest distances from one node
    Distances {
        /// Start node
        #[arg(long)]
        source: NodeId,

        /// Run on the reversed graph (distances *to* the node)
        #[arg(long)]
        reverse: bool,

        /// Pause after each processed node, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the configured graph
    Graph {
        /// Print the reversed edge list
        #[arg(long)]
        reverse: bool,
    },
}
