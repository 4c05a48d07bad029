//! wext CLI entry point: argument parsing, logging setup, command dispatch.

use std::process::ExitCode;

use clap::Parser;
use wext_cli::{cli, commands, logger};

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Dev(dev_args) => commands::dev_execute(dev_args),
        cli::Command::Build(build_args) => commands::build_execute(build_args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
