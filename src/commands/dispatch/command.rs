//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use waypath_core::config::WaypathConfig;
use waypath_core::engine::{CancelHandle, CancelToken, Pacing};
use waypath_core::error::{Result, WaypathError};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
    pub config: WaypathConfig,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &Path, start: Instant) -> Result<Self> {
        let config = WaypathConfig::discover(cli.config.as_deref(), root)?;
        Ok(Self { cli, start, config })
    }

    /// The configured step delay unless overridden on the command line
    pub fn pacing(&self, delay_ms: Option<u64>) -> Pacing {
        delay_ms
            .map(Pacing::from_millis)
            .unwrap_or_else(|| self.config.pacing())
    }

    /// Drive `future` to completion on a single-threaded runtime
    pub fn block_on<F: std::future::Future>(&self, future: F) -> Result<F::Output> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|e| WaypathError::failed("start async runtime", e))?;
        Ok(runtime.block_on(future))
    }
}

/// Cancel token that fires on Ctrl-C
pub fn interrupt_token() -> CancelToken {
    let handle = CancelHandle::new();
    let token = handle.token();

    if let Err(e) = ctrlc::set_handler(move || {
        handle.cancel();
    }) {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
    }

    token
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waypath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-animated shortest paths and common-waypoint search.");
        println!();
        println!("Run `waypath --help` for usage information.");
        Ok(())
    }
}
