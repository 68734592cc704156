//! `waypath distances`: one engine run from a single node

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{interrupt_token, Command, CommandContext};
use crate::commands::printer::Printer;
use waypath_core::engine;
use waypath_core::error::Result;
use waypath_core::graph::{DistanceVector, NodeId};

pub struct DistancesCommand {
    pub source: NodeId,
    pub reverse: bool,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
struct DistancesOutput<'a> {
    source: NodeId,
    reverse: bool,
    distances: &'a DistanceVector,
}

impl Command for DistancesCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let configured = ctx.config.graph()?;
        let graph = if self.reverse {
            configured.reverse()
        } else {
            configured
        };

        let pacing = ctx.pacing(self.delay_ms);
        let streaming = ctx.cli.format == OutputFormat::Human && !ctx.cli.quiet;
        let mut printer = Printer::new(!streaming);
        let cancel = interrupt_token();

        let dist = ctx.block_on(engine::run(
            &graph,
            self.source,
            pacing,
            &mut printer,
            &cancel,
        ))??;

        match ctx.cli.format {
            OutputFormat::Human => println!("Distances: {}", dist),
            OutputFormat::Json => {
                let output = DistancesOutput {
                    source: self.source,
                    reverse: self.reverse,
                    distances: &dist,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Records => {
                println!(
                    "H waypath=1 records=1 mode=distances source={} reverse={} nodes={}",
                    self.source,
                    self.reverse,
                    dist.len()
                );
                for (node, d) in dist.iter().enumerate() {
                    println!("D {} {}", node, d);
                }
            }
        }

        tracing::debug!(elapsed = ?ctx.start.elapsed(), "distances_complete");
        Ok(())
    }
}
