//! Domain-specific error types and their process exit codes.
//!
//! Internal modules return typed errors (e.g., [`ConfigError`],
//! [`DispatchError`]) while command handlers at the CLI boundary convert
//! them to [`anyhow::Error`] via `?`. [`exit_code`] walks the error chain back
//! to the typed error to pick the exit status.
//!
//! # Error hierarchy
//!
//! ```text
//! ShellEnvError
//! ├── Config(ConfigError)          bad runcom/module list, root     (exit 1)
//! ├── Dependency(DependencyError)  required program not on PATH      (exit 2)
//! └── Dispatch(DispatchError)      no handler for shell.operation    (exit 3)
//! ```

use thiserror::Error;

/// Generic failure.
pub const EXIT_FAILURE: u8 = 1;
/// A required external program is missing.
pub const EXIT_MISSING_DEPENDENCY: u8 = 2;
/// No handler is registered for the requested shell operation.
pub const EXIT_UNKNOWN_COMMAND: u8 = 3;
/// Uncaught internal error (panic).
pub const EXIT_INTERNAL: u8 = 42;

/// Top-level error type for shellenv.
#[derive(Error, Debug)]
pub enum ShellEnvError {
    /// Invalid user input or configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A required external program is missing.
    #[error(transparent)]
    Dependency(#[from] DependencyError),

    /// Shell dispatch failure.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl ShellEnvError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_FAILURE,
            Self::Dependency(_) => EXIT_MISSING_DEPENDENCY,
            Self::Dispatch(_) => EXIT_UNKNOWN_COMMAND,
        }
    }
}

/// Errors in user input or configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A runcom token contains characters outside `[a-z0-9_-]`.
    #[error("Invalid runcom '{0}': expected lowercase letters, digits, '_' or '-'")]
    InvalidRuncom(String),

    /// The runcom list contains no tokens.
    #[error("Empty runcom list '{0}'")]
    EmptyRuncomList(String),

    /// The log level name is not on the level scale.
    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),

    /// A module name is not a single directory name under the root.
    #[error("Invalid module '{0}': expected a single directory name")]
    InvalidModule(String),

    /// The module order is empty.
    #[error("Module list is empty")]
    EmptyModuleList,

    /// The lookup root directory does not exist.
    #[error("Root directory not found: {0}")]
    RootNotFound(String),
}

/// Errors raised when a required program is missing.
#[derive(Error, Debug)]
pub enum DependencyError {
    /// The program could not be found on `PATH`.
    #[error("Required program '{0}' not found in PATH")]
    Missing(String),
}

/// Errors raised by the shell dispatcher.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler is registered under the composed `<shell>.<operation>` name.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Pick the process exit code for an error returned by a command.
///
/// Typed errors anywhere in the chain map to their own code; everything else
/// is a generic failure.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ShellEnvError>() {
            return e.exit_code();
        }
        if cause.is::<DependencyError>() {
            return EXIT_MISSING_DEPENDENCY;
        }
        if cause.is::<DispatchError>() {
            return EXIT_UNKNOWN_COMMAND;
        }
        if cause.is::<ConfigError>() {
            return EXIT_FAILURE;
        }
    }
    EXIT_FAILURE
}
