//! Static deployment configuration: the networks the scripts may target and
//! the compiler settings the deployed artifacts are built with.

use std::env;

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEPLOYER_KEY_ENV_VAR, SOLC_OPTIMIZER_RUNS, SOLC_VERSION, TEST_DEPLOYER_KEY_ENV_VAR},
    errors::ScriptError,
};

/// Everything the scripts know about a single target network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    /// The network identifier passed on the command line
    pub name: &'static str,
    /// The default RPC endpoint of the network
    pub rpc_url: &'static str,
    /// The environment variable holding the deployer's private key
    pub signer_key_env_var: &'static str,
    /// The address of the pre-deployed `TuringCredit` contract, if the
    /// network has one
    pub dependency_address: Option<Address>,
}

/// Every network the scripts may be run against
pub const NETWORK_PROFILES: &[NetworkProfile] = &[
    NetworkProfile {
        name: "boba",
        rpc_url: "https://mainnet.boba.network",
        signer_key_env_var: DEPLOYER_KEY_ENV_VAR,
        dependency_address: Some(address!("F8D2f1b0292C0Eeef80D8F47661A9DaCDB4b23bf")),
    },
    NetworkProfile {
        name: "bobaRinkeby",
        rpc_url: "https://rinkeby.boba.network",
        signer_key_env_var: TEST_DEPLOYER_KEY_ENV_VAR,
        dependency_address: Some(address!("208c3CE906cd85362bd29467819d3AcbE5FC1614")),
    },
    NetworkProfile {
        name: "bobaAvaxTest",
        rpc_url: "https://testnet.avax.boba.network",
        signer_key_env_var: DEPLOYER_KEY_ENV_VAR,
        dependency_address: None,
    },
];

impl NetworkProfile {
    /// Look up the profile for the given network identifier
    pub fn lookup(network_id: &str) -> Result<&'static NetworkProfile, ScriptError> {
        NETWORK_PROFILES
            .iter()
            .find(|profile| profile.name == network_id)
            .ok_or_else(|| ScriptError::UnknownNetwork(network_id.to_string()))
    }

    /// The dependency address passed to the deployed contract's constructor.
    ///
    /// Fails rather than deploying against an undefined dependency.
    pub fn dependency(&self) -> Result<Address, ScriptError> {
        self.dependency_address
            .ok_or_else(|| ScriptError::MissingDependency(self.name.to_string()))
    }

    /// Read the deployer's private key from the process environment
    pub fn signer_key(&self) -> Result<String, ScriptError> {
        self.signer_key_from(|var| env::var(var).ok())
    }

    /// Read the deployer's private key using the given variable lookup
    pub fn signer_key_from(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<String, ScriptError> {
        lookup(self.signer_key_env_var)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ScriptError::MissingCredential(self.signer_key_env_var.to_string()))
    }
}

/// The Solidity compiler settings the deployed artifacts are built with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
    /// The `solc` version
    pub version: String,
    /// Whether the optimizer is enabled
    pub optimizer_enabled: bool,
    /// The number of optimizer runs
    pub optimizer_runs: u32,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: SOLC_VERSION.to_string(),
            optimizer_enabled: true,
            optimizer_runs: SOLC_OPTIMIZER_RUNS,
        }
    }
}
