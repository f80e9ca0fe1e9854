//! Command implementations for all cinerec commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::trace_command;
use crate::commands::{catalog, collab, content, similarity};
use cinerec_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Content(args) => content::execute(ctx.cli, &ctx.config, args),
            Commands::Collab(args) => collab::execute(ctx.cli, &ctx.config, args),
            Commands::Catalog(args) => catalog::execute(ctx.cli, args),
            Commands::Similarity(args) => similarity::execute(ctx.cli, args),
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
