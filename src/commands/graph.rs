//! `waypath graph`: print the configured edge list

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{Command, CommandContext};
use waypath_core::error::Result;

pub struct GraphCommand {
    pub reverse: bool,
}

impl Command for GraphCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let configured = ctx.config.graph()?;
        let graph = if self.reverse {
            configured.reverse()
        } else {
            configured
        };

        match ctx.cli.format {
            OutputFormat::Human => {
                if !ctx.cli.quiet {
                    println!(
                        "{} nodes, {} edges{}",
                        graph.num_nodes(),
                        graph.edges().len(),
                        if self.reverse { " (reversed)" } else { "" }
                    );
                }
                for edge in graph.edges() {
                    println!("{} -> {} ({})", edge.from, edge.to, edge.weight);
                }
            }
            OutputFormat::Json => {
                let output = json!({
                    "reverse": self.reverse,
                    "graph": graph,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Records => {
                println!(
                    "H waypath=1 records=1 mode=graph nodes={} edges={} reverse={}",
                    graph.num_nodes(),
                    graph.edges().len(),
                    self.reverse
                );
                for edge in graph.edges() {
                    println!("E {} {} {}", edge.from, edge.to, edge.weight);
                }
            }
        }

        Ok(())
    }
}
