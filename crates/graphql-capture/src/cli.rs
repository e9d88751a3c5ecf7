use clap::CommandFactory;
use crate::commands;

/// Inspect the GraphQL traffic recorded in HTTP capture (HAR) files.
///
/// Requests are classified by content type, body shape, or `--url-pattern`;
/// every GraphQL operation they carry (batches included) is parsed into an
/// operation tree and paired with its slice of the response.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-capture", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log debug output to stderr. Without it, the LOG_LEVEL \
             environment variable (trace, debug, info, warn) picks the level.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand there is nothing to inspect: print usage.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
