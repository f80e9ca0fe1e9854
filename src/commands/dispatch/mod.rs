//! Command dispatch logic for cinerec

use std::time::Instant;

use crate::cli::Cli;
use cinerec_core::config::EngineConfig;
use cinerec_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = EngineConfig::load_or_default(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), config = ?cli.config, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
