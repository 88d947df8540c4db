//! Definitions of CLI arguments and commands for the deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy_contract, export_abi, list_accounts, list_networks},
    constants::{
        DEFAULT_ABI_PATH, DEFAULT_ARTIFACTS_PATH, DEFAULT_DEPLOYMENTS_PATH,
        TURING_SUBSCRIPTION_MANAGER_CONTRACT,
    },
    errors::ScriptError,
};

/// Deploy the Turing subscription manager contract to a Boba network
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy script commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy a contract if it changed since its last deployment
    Deploy(DeployArgs),
    /// Print the list of accounts
    Accounts(AccountsArgs),
    /// Export a contract's ABI as JSON
    ExportAbi(ExportAbiArgs),
    /// Print the known networks and the compiler settings
    Networks,
}

impl Command {
    /// Run the command to completion
    pub async fn run(self) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy_contract(args).await,
            Command::Accounts(args) => list_accounts(args).await,
            Command::ExportAbi(args) => export_abi(args),
            Command::Networks => {
                list_networks();
                Ok(())
            }
        }
    }
}

/// The network to connect to
#[derive(Args)]
pub struct NetworkArgs {
    /// Identifier of the target network, e.g. `boba` or `bobaRinkeby`
    #[arg(short, long, env = "NETWORK")]
    pub network: String,

    /// Override for the network's RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: Option<String>,
}

/// Deploy a contract, skipping the deployment if the same bytecode and
/// constructor arguments are already live on the network
#[derive(Args)]
pub struct DeployArgs {
    /// The network to deploy to
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Name of the contract artifact to deploy
    #[arg(short, long, default_value = TURING_SUBSCRIPTION_MANAGER_CONTRACT)]
    pub contract: String,

    /// Directory containing the compiled contract artifacts
    #[arg(long, default_value = DEFAULT_ARTIFACTS_PATH)]
    pub artifacts_path: PathBuf,

    /// Directory in which deployment records are kept
    #[arg(long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: PathBuf,
}

/// Print the list of accounts
#[derive(Args)]
pub struct AccountsArgs {
    /// The network whose accounts to print
    #[command(flatten)]
    pub network: NetworkArgs,
}

/// Export a contract's ABI as JSON
#[derive(Args)]
pub struct ExportAbiArgs {
    /// Name of the contract artifact whose ABI to export
    #[arg(short, long, default_value = TURING_SUBSCRIPTION_MANAGER_CONTRACT)]
    pub contract: String,

    /// Directory containing the compiled contract artifacts
    #[arg(long, default_value = DEFAULT_ARTIFACTS_PATH)]
    pub artifacts_path: PathBuf,

    /// Directory to write the ABI to
    #[arg(long, default_value = DEFAULT_ABI_PATH)]
    pub abi_path: PathBuf,
}
