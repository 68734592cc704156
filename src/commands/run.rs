//! `waypath run`: common-waypoint search over the configured graph

use std::fs;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{interrupt_token, Command, CommandContext};
use crate::commands::printer::Printer;
use waypath_core::error::Result;
use waypath_core::graph::NodeId;
use waypath_core::present::Diagram;
use waypath_core::waypoint::{compute_minimum_waypoint_weight, WaypointQuery, WaypointReport};

pub struct RunCommand {
    pub src1: Option<NodeId>,
    pub src2: Option<NodeId>,
    pub dest: Option<NodeId>,
    pub delay_ms: Option<u64>,
    pub svg: Option<PathBuf>,
}

impl RunCommand {
    /// Command-line endpoints over the configured query
    fn query(&self, ctx: &CommandContext) -> WaypointQuery {
        let configured = ctx.config.query;
        WaypointQuery {
            src1: self.src1.unwrap_or(configured.src1),
            src2: self.src2.unwrap_or(configured.src2),
            dest: self.dest.unwrap_or(configured.dest),
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let graph = ctx.config.graph()?;
        let layout = ctx.config.layout(&graph)?;
        let query = self.query(ctx);
        query.validate(&graph)?;

        let pacing = ctx.pacing(self.delay_ms);
        let streaming = ctx.cli.format == OutputFormat::Human && !ctx.cli.quiet;
        let mut diagram = Diagram::new(graph.clone(), layout);
        let mut observer = (Printer::new(!streaming), &mut diagram);
        let cancel = interrupt_token();

        tracing::debug!(?query, step_delay = ?pacing.step_delay(), "run_start");

        let report = ctx.block_on(compute_minimum_waypoint_weight(
            &graph,
            query,
            pacing,
            &mut observer,
            &cancel,
        ))??;

        if let Some(path) = &self.svg {
            fs::write(path, diagram.to_svg())?;
            tracing::debug!(path = %path.display(), "svg_written");
        }

        match ctx.cli.format {
            OutputFormat::Human => output_human(&report, ctx.cli.quiet),
            OutputFormat::Json => output_json(&report)?,
            OutputFormat::Records => output_records(&report),
        }

        tracing::debug!(elapsed = ?ctx.start.elapsed(), "run_complete");
        Ok(())
    }
}

/// Log lines were streamed already; quiet mode prints just the answer
fn output_human(report: &WaypointReport, quiet: bool) {
    if quiet {
        println!("Final minimum weight: {}", report.minimum);
    }
}

fn output_json(report: &WaypointReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn output_records(report: &WaypointReport) {
    for line in records(report) {
        println!("{}", line);
    }
}

fn records(report: &WaypointReport) -> Vec<String> {
    let query = report.query;
    let mut lines = vec![format!(
        "H waypath=1 records=1 mode=run src1={} src2={} dest={} nodes={}",
        query.src1,
        query.src2,
        query.dest,
        report.candidates.len()
    )];

    lines.extend(report.candidates.iter().map(|c| {
        format!(
            "N {} d1={} d2={} d3={} combined={}",
            c.node, c.from_src1, c.from_src2, c.to_dest, c.combined
        )
    }));

    let pivot = report
        .pivot
        .map(|node| node.to_string())
        .unwrap_or_else(|| "-".to_string());
    lines.push(format!("M minimum={} pivot={}", report.minimum, pivot));
    lines
}
