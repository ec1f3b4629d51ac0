//! `gen`: print sourcing code for the resolved module files.
use anyhow::Result;

use super::ShellInvocation;
use crate::cli::ShellArgs;
use crate::config::Settings;
use crate::platform;
use crate::shells::{Dispatcher, Operation};

/// Run the gen command.
///
/// The target shell binary must be on `PATH`; this is checked before any
/// module is resolved. Shells without a `gen_code` handler fail with an
/// unknown-command error instead.
///
/// # Errors
///
/// Returns an error if the runcom list is invalid, the shell has no handler,
/// or the shell binary is missing.
pub fn run(settings: &Settings, args: &ShellArgs) -> Result<String> {
    let invocation = ShellInvocation::new(settings, args)?;
    let dispatcher = Dispatcher::with_builtin_shells();
    if dispatcher.supports(&invocation.shell, Operation::GenCode) {
        let path = platform::require_program(&invocation.shell)?;
        settings
            .log
            .debug(&format!("{} found at {}", invocation.shell, path.display()));
    }
    invocation.dispatch(&dispatcher, Operation::GenCode, &settings.log)
}
