//! `shellenv` binary: parse arguments, set up logging and run one command.
use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use shellenv_cli::error::{EXIT_FAILURE, EXIT_UNKNOWN_COMMAND, exit_code};
use shellenv_cli::{cli, commands, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    logging::install_panic_hook();

    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                ErrorKind::InvalidSubcommand => ExitCode::from(EXIT_UNKNOWN_COMMAND),
                _ => ExitCode::from(EXIT_FAILURE),
            };
        }
    };

    logging::init_subscriber(args.global.log_level);
    let log = logging::Logger::new(args.global.log_level);

    match commands::run(&args, log) {
        Ok(output) => {
            if let Err(e) = std::io::stdout().lock().write_all(output.as_bytes()) {
                log.error(&format!("writing output: {e}"));
                return ExitCode::from(EXIT_FAILURE);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::from(exit_code(&e))
        }
    }
}
