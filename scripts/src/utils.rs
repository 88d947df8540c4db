//! Utilities for the deploy scripts

use std::str::FromStr;

use alloy::{
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{backend::RpcBackend, constants::DEFAULT_LOG_FILTER, errors::ScriptError};

/// Sets up a backend connected to the given RPC url, signing with the given
/// private key
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<RpcBackend, ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let deployer = signer.address();
    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);

    Ok(RpcBackend::new(DynProvider::new(provider), vec![deployer]))
}

/// Installs the global tracing subscriber, honoring `RUST_LOG` when set
pub fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
