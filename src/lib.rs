#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod detect;
pub mod error;
pub mod filter;
pub mod ops;
pub mod report;
pub mod rules;
pub mod validation;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    command::rebrand::execute(cli.args)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
