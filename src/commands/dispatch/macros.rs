//! Macros for command timing and logging

/// Trace command execution when running verbose
///
/// Usage:
/// ```ignore
/// trace_command!(ctx.cli, ctx.start, "execute_command");
/// ```
macro_rules! trace_command {
    ($cli:expr, $start:expr, $label:expr) => {
        if $cli.verbose {
            ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;
