//! Command dispatch logic for waypath

mod command;

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{distances, graph, run as run_cmd};
use waypath_core::error::Result;

pub use command::{interrupt_token, Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let ctx = CommandContext::new(cli, &root, start)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        None => NoCommand.execute(&ctx),

        Some(Commands::Run {
            src1,
            src2,
            dest,
            delay_ms,
            svg,
        }) => run_cmd::RunCommand {
            src1: *src1,
            src2: *src2,
            dest: *dest,
            delay_ms: *delay_ms,
            svg: svg.clone(),
        }
        .execute(&ctx),

        Some(Commands::Distances {
            source,
            reverse,
            delay_ms,
        }) => distances::DistancesCommand {
            source: *source,
            reverse: *reverse,
            delay_ms: *delay_ms,
        }
        .execute(&ctx),

        Some(Commands::Graph { reverse }) => graph::GraphCommand { reverse: *reverse }.execute(&ctx),
    }
}
