//! Implementations of the deploy script commands

use alloy::primitives::Address;
use tracing::{info, warn};

use crate::{
    artifacts::Artifact,
    backend::{DeploymentBackend, RpcBackend},
    cli::{AccountsArgs, DeployArgs, ExportAbiArgs, NetworkArgs},
    config::{CompilerSettings, NetworkProfile, NETWORK_PROFILES},
    deployments::{DeploymentRecord, DeploymentStore},
    errors::ScriptError,
    utils::setup_client,
};

/// Deploy the named artifact to the given network, unless an identical
/// deployment is already live there.
///
/// The only constructor argument is the network's dependency address. The
/// first of `accounts` sends the deployment. A stored record is reused when
/// its bytecode hash matches and code is still present at its address.
pub async fn deploy(
    network_id: &str,
    accounts: &[Address],
    artifact: &Artifact,
    store: &DeploymentStore,
    backend: &impl DeploymentBackend,
) -> Result<DeploymentRecord, ScriptError> {
    let profile = NetworkProfile::lookup(network_id)?;
    let dependency = profile.dependency()?;
    let deployer = *accounts.first().ok_or(ScriptError::NoSigners)?;

    info!("=============================");
    info!("deployer: {:#x}", deployer);
    info!("=============================");

    let constructor_args = vec![dependency];
    let deploy_code = artifact.deploy_code(&constructor_args)?;
    let bytecode_hash = artifact.bytecode_hash(&constructor_args)?;
    let chain_id = backend.chain_id().await?;

    if let Some(existing) = store.load(profile.name, &artifact.contract_name)? {
        if existing.chain_id != chain_id {
            return Err(ScriptError::ReadDeployments(format!(
                "record of {} on {} is for chain {}, but the network reports chain {}",
                existing.contract_name, profile.name, existing.chain_id, chain_id
            )));
        }

        if existing.bytecode_hash == bytecode_hash {
            if !backend.code_at(existing.address).await?.is_empty() {
                info!(
                    "reusing {} at {:#x}",
                    existing.contract_name, existing.address
                );
                return Ok(existing);
            }
            warn!(
                "no code found at recorded address {:#x}, redeploying {}",
                existing.address, existing.contract_name
            );
        } else {
            info!(
                "{} changed since its deployment at {:#x}, redeploying",
                existing.contract_name, existing.address
            );
        }
    }

    let sent = backend.send_deployment(deployer, deploy_code).await?;
    let record = DeploymentRecord {
        contract_name: artifact.contract_name.clone(),
        network: profile.name.to_string(),
        chain_id,
        address: sent.address,
        constructor_args,
        deployer,
        bytecode_hash,
        transaction_hash: Some(sent.transaction_hash),
        compiler: CompilerSettings::default(),
    };
    let path = store.save(&record)?;

    info!(
        "{} deployed: {:#x} (tx {:#x})",
        record.contract_name, record.address, sent.transaction_hash
    );
    info!("deployment recorded at {}", path.display());

    Ok(record)
}

/// Run the `deploy` command
pub async fn deploy_contract(args: DeployArgs) -> Result<(), ScriptError> {
    let backend = connect(&args.network)?;
    let artifact = Artifact::load(&args.artifacts_path, &args.contract)?;
    let store = DeploymentStore::new(&args.deployments_path);

    let record = deploy(
        &args.network.network,
        &backend.accounts(),
        &artifact,
        &store,
        &backend,
    )
    .await?;

    println!("{} deployed at {:#x}", record.contract_name, record.address);
    Ok(())
}

/// Run the `accounts` command, printing each available signer account
pub async fn list_accounts(args: AccountsArgs) -> Result<(), ScriptError> {
    let backend = connect(&args.network)?;
    let chain_id = backend.chain_id().await?;
    info!("connected to {} (chain {})", args.network.network, chain_id);

    for account in backend.accounts() {
        println!("{:#x}", account);
    }

    Ok(())
}

/// Run the `export-abi` command
pub fn export_abi(args: ExportAbiArgs) -> Result<(), ScriptError> {
    let artifact = Artifact::load(&args.artifacts_path, &args.contract)?;
    let path = artifact.export_abi(&args.abi_path)?;
    println!("{} ABI written to {}", artifact.contract_name, path.display());
    Ok(())
}

/// Run the `networks` command, printing the network profile table
pub fn list_networks() {
    for profile in NETWORK_PROFILES {
        let dependency = profile
            .dependency_address
            .map(|address| format!("{address:#x}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} {:<36} {:<18} {}",
            profile.name, profile.rpc_url, profile.signer_key_env_var, dependency
        );
    }

    let compiler = CompilerSettings::default();
    println!(
        "solc {} (optimizer: {}, runs: {})",
        compiler.version, compiler.optimizer_enabled, compiler.optimizer_runs
    );
}

/// Resolve the network's profile and deployer key, then connect to it.
///
/// The key is read before any RPC traffic so a missing credential fails
/// immediately.
fn connect(args: &NetworkArgs) -> Result<RpcBackend, ScriptError> {
    let profile = NetworkProfile::lookup(&args.network)?;
    let priv_key = profile.signer_key()?;
    let rpc_url = args.rpc_url.as_deref().unwrap_or(profile.rpc_url);
    setup_client(&priv_key, rpc_url)
}

