use crate::command::rebrand::RebrandArgs;
use clap::Parser;

/// Rebrand a Blinc repository to Junita.
///
/// Rewrites brand names, organization handles, URLs and package prefixes in
/// every text file, then renames files and directories carrying the brand.
#[derive(Parser, Debug)]
#[command(name = "junita-rebrand", version)]
pub struct Cli {
    #[command(flatten)]
    pub args: RebrandArgs,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
