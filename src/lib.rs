//! Shell environment bootstrapper.
//!
//! Resolves, for each requested runcom (shell startup phase) and each module
//! directory under a lookup root, the single configuration fragment to load,
//! then renders shell code that sources them in order or a plain listing of
//! the chosen files.
//!
//! The public API is organised into four layers:
//!
//! - **[`modules`]**: candidate lookup, layout detection and the ordered walk
//! - **[`shells`]**: per-shell handlers behind a `<shell>.<operation>` registry
//! - **[`config`]**: effective settings from flags, environment and `shellenv.toml`
//! - **[`commands`]**: top-level subcommands (`gen`, `files`, `help`, ...)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod modules;
pub mod platform;
pub mod shells;
