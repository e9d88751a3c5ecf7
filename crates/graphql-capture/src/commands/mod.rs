mod inspect;

use crate::Cli;
use crate::CommandResult;
use inspect::InspectCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-capture")]
pub(crate) enum CommandEnum {
    /// Print the GraphQL operations found in one or more HAR capture files,
    /// as JSON display records or as raw query text and variables.
    #[command(visible_alias = "i")]
    Inspect(Box<InspectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Inspect(cmd) => cmd.run(cli).await
        }
    }
}
