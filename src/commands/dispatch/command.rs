//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use cinerec_core::config::EngineConfig;
use cinerec_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: EngineConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("cinerec {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Movie recommendations from genre tags and user ratings.");
        println!();
        println!("Run `cinerec --help` for usage information.");
        Ok(())
    }
}
