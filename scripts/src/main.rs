use clap::Parser;
use turing_scripts::{cli::Cli, errors::ScriptError, utils::setup_logging};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli { command } = Cli::parse();

    setup_logging();

    command.run().await
}
