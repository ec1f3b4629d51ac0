//! `completions`: shell completion scripts for shellenv itself.
use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Render the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn render(shell: Shell) -> Result<String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "shellenv", &mut buf);
    String::from_utf8(buf).context("completion script is not valid UTF-8")
}
