//! `files`: list the resolved module files.
use anyhow::Result;

use super::ShellInvocation;
use crate::cli::ShellArgs;
use crate::config::Settings;
use crate::shells::{Dispatcher, Operation};

/// Run the files command.
///
/// # Errors
///
/// Returns an error if the runcom list is invalid or the shell has no
/// `lookup_files` handler.
pub fn run(settings: &Settings, args: &ShellArgs) -> Result<String> {
    let invocation = ShellInvocation::new(settings, args)?;
    let dispatcher = Dispatcher::with_builtin_shells();
    let listing = invocation.dispatch(&dispatcher, Operation::LookupFiles, &settings.log)?;
    settings
        .log
        .info(&format!("{} file(s) resolved", listing.lines().count()));
    Ok(listing)
}
