mod args;
mod config;
mod global;
mod handlers;
mod options;
mod report;

use clap::Parser;
use std::process::ExitCode;
use thiserror::Error as ThisError;

use args::{Cli, Command};
use transform_d::error::Error;

/// Why a CLI invocation stopped early.
#[derive(Debug, ThisError)]
pub enum Failure {
    /// Per-transform flag parsing ended: help output or a usage error
    #[error(transparent)]
    Flags(#[from] clap::Error),

    #[error(transparent)]
    Run(#[from] Error),
}

fn init_logging(level: &str) {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    );
}

fn execute(cli: Cli) -> Result<(), Failure> {
    let config = config::load(cli.global.config.as_deref())?;

    match cli.command {
        Command::Show(args) => Ok(handlers::show::handle(args)?),
        Command::Describe(args) => Ok(handlers::describe::handle(args)?),
        Command::Run(tokens) => handlers::run::handle(tokens, &cli.global, &config),
    }
}

fn print_clap(e: &clap::Error) -> ExitCode {
    // help and version also land here, with exit code 0
    let _ = e.print();
    ExitCode::from(e.exit_code() as u8)
}

pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return print_clap(&e),
    };

    init_logging(cli.global.log_level());
    let use_color = report::should_use_color(cli.global.no_color);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Flags(e)) => print_clap(&e),
        Err(Failure::Run(e)) => {
            eprintln!("{}", report::render(&e, use_color));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
