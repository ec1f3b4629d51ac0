//! Command-line surface: global options, subcommands and their positionals.
use clap::{Args, Parser, Subcommand};

use crate::logging::Level;

/// Top-level CLI entry point for the shell environment bootstrapper.
#[derive(Parser, Debug)]
#[command(
    name = "shellenv",
    about = "Resolve per-module shell runcom files and emit sourcing code",
    version = crate::commands::version(),
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Options accepted before or after the subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Print side effects instead of performing them
    #[arg(short = 'n', long, global = true, env = "SHELLENV_DRY")]
    pub dry_run: bool,

    /// Force operations that would otherwise be refused
    #[arg(short, long, global = true, env = "SHELLENV_FORCE")]
    pub force: bool,

    /// Minimum log level (TRACE:DEBUG:RUN:INFO:DRY:HINT:NOTICE:CMD:USER:WARN:ERR:ERROR:CRIT:TODO:DIE)
    #[arg(
        short = 'v',
        long = "log-level",
        value_name = "LEVEL",
        global = true,
        env = "SHELLENV_LOG_LEVEL",
        default_value = "INFO"
    )]
    pub log_level: Level,

    /// Directory holding one subdirectory per module
    #[arg(long, value_name = "DIR", global = true, env = "SHELLENV_ROOT")]
    pub root: Option<std::path::PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print shell code that sources every resolved module file
    Gen(ShellArgs),
    /// List resolved module files as tab-separated records
    Files(ShellArgs),
    /// List the module order and the layout of each module
    Modules,
    /// Print a completion script for shellenv
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
    /// Show commands, options and version information
    Help,
}

/// Positional arguments of `gen` and `files`.
#[derive(Args, Debug, Clone, Default)]
pub struct ShellArgs {
    /// Colon-separated runcom list [default: lib:env:interactive:login:comp]
    pub runcoms: Option<String>,

    /// Target shell [default: the current shell]
    pub shell: Option<String>,
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_gen_without_arguments() {
        let cli = Cli::parse_from(["shellenv", "gen"]);
        assert!(
            matches!(&cli.command, Command::Gen(args) if args.runcoms.is_none() && args.shell.is_none())
        );
    }

    #[test]
    fn parse_gen_with_runcoms_and_shell() {
        let cli = Cli::parse_from(["shellenv", "gen", "env:login", "bash"]);
        let Command::Gen(args) = cli.command else {
            panic!("expected gen");
        };
        assert_eq!(args.runcoms.as_deref(), Some("env:login"));
        assert_eq!(args.shell.as_deref(), Some("bash"));
    }

    #[test]
    fn parse_files_with_runcoms_only() {
        let cli = Cli::parse_from(["shellenv", "files", "comp"]);
        let Command::Files(args) = cli.command else {
            panic!("expected files");
        };
        assert_eq!(args.runcoms.as_deref(), Some("comp"));
        assert!(args.shell.is_none());
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from(["shellenv", "-n", "-f", "-v", "debug", "files"]);
        assert!(cli.global.dry_run);
        assert!(cli.global.force);
        assert_eq!(cli.global.log_level, Level::Debug);
    }

    #[test]
    fn log_level_defaults_to_info() {
        let cli = Cli::parse_from(["shellenv", "gen"]);
        assert_eq!(cli.global.log_level, Level::Info);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["shellenv", "-v", "LOUD", "gen"]).is_err());
    }

    #[test]
    fn parse_root_override() {
        let cli = Cli::parse_from(["shellenv", "--root", "/tmp/shell", "files"]);
        assert_eq!(
            cli.global.root,
            Some(std::path::PathBuf::from("/tmp/shell"))
        );
    }

    #[test]
    fn help_is_a_regular_command() {
        let cli = Cli::parse_from(["shellenv", "help"]);
        assert!(matches!(cli.command, Command::Help));
    }

    #[test]
    fn unknown_command_is_invalid_subcommand() {
        let err = Cli::try_parse_from(["shellenv", "frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["shellenv", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Command::Completions {
                shell: clap_complete::Shell::Bash
            }
        ));
    }
}
