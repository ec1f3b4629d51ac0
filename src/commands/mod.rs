//! Top-level subcommands and the shell invocation they share.
pub mod completions;
pub mod files;
pub mod generate;
pub mod help;
pub mod modules;

use anyhow::Result;
use clap::CommandFactory as _;

use crate::cli::{Cli, Command, ShellArgs};
use crate::config::Settings;
use crate::logging::Logger;
use crate::modules::runcom;
use crate::platform;
use crate::shells::{Dispatcher, Operation, Request};

/// Version string: `SHELLENV_VERSION` from the build, else the crate version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("SHELLENV_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Run the parsed command and return what it prints on stdout.
///
/// # Errors
///
/// Returns the command's error; see [`crate::error::exit_code`] for how it
/// maps to an exit status.
pub fn run(cli: &Cli, log: Logger) -> Result<String> {
    match &cli.command {
        Command::Help => Ok(help::render(&Cli::command())),
        Command::Completions { shell } => completions::render(*shell),
        Command::Gen(args) => generate::run(&Settings::load(&cli.global, log)?, args),
        Command::Files(args) => files::run(&Settings::load(&cli.global, log)?, args),
        Command::Modules => Ok(modules::run(&Settings::load(&cli.global, log)?)),
    }
}

/// Shell operation resolved from positional arguments and settings.
#[derive(Debug)]
pub struct ShellInvocation {
    /// Target shell name.
    pub shell: String,
    /// Handler inputs.
    pub request: Request,
}

impl ShellInvocation {
    /// Fill in defaults for missing positional arguments and parse the
    /// runcom list.
    ///
    /// # Errors
    ///
    /// Returns an error if the runcom list is invalid.
    pub fn new(settings: &Settings, args: &ShellArgs) -> Result<Self> {
        let runcoms = args
            .runcoms
            .as_deref()
            .unwrap_or(&settings.default_runcoms);
        let shell = args
            .shell
            .clone()
            .unwrap_or_else(platform::detect_shell);
        settings
            .log
            .debug(&format!("shell: {shell}, runcoms: {runcoms}"));
        Ok(Self {
            shell,
            request: Request {
                root: settings.root.clone(),
                modules: settings.modules.clone(),
                runcoms: runcom::parse_list(runcoms)?,
                path_prepend: settings.path_prepend.clone(),
            },
        })
    }

    /// Dispatch `operation` for this shell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::DispatchError::UnknownCommand`] when the shell
    /// has no handler for `operation`, or the handler's error.
    pub fn dispatch(
        &self,
        dispatcher: &Dispatcher,
        operation: Operation,
        log: &Logger,
    ) -> Result<String> {
        if log.enabled(crate::logging::Level::Debug) {
            for entry in self.request.entries() {
                log.debug(&format!(
                    "{} {}: {}",
                    entry.runcom,
                    entry.module,
                    entry.full_path().display()
                ));
            }
        }
        log.run(&format!("{}.{operation}", self.shell));
        dispatcher.dispatch(&self.shell, operation, &self.request)
    }
}
