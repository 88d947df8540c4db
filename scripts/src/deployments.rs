//! Persistence of deployment records, one JSON file per (network, contract) pair

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use alloy::primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::{config::CompilerSettings, constants::JSON_EXTENSION, errors::ScriptError};

/// The record of a contract deployed to a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    /// The name of the deployed contract
    pub contract_name: String,
    /// The network the contract was deployed to
    pub network: String,
    /// The chain ID reported by the network at deploy time
    pub chain_id: u64,
    /// The address of the deployed contract
    pub address: Address,
    /// The constructor arguments the contract was deployed with
    pub constructor_args: Vec<Address>,
    /// The account that sent the deployment transaction
    pub deployer: Address,
    /// The keccak hash of the creation bytecode and encoded constructor
    /// arguments
    pub bytecode_hash: B256,
    /// The hash of the deployment transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<B256>,
    /// The compiler settings the deployed bytecode was built with
    pub compiler: CompilerSettings,
}

/// A directory of deployment records, laid out as
/// `<root>/<network>/<contract>.json`
#[derive(Debug, Clone)]
pub struct DeploymentStore {
    /// The root directory of the store
    root: PathBuf,
}

impl DeploymentStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The path of the record for the given network and contract
    pub fn record_path(&self, network: &str, contract_name: &str) -> PathBuf {
        self.root
            .join(network)
            .join(contract_name)
            .with_extension(JSON_EXTENSION)
    }

    /// Load the record for the given network and contract, if one exists
    pub fn load(
        &self,
        network: &str,
        contract_name: &str,
    ) -> Result<Option<DeploymentRecord>, ScriptError> {
        let path = self.record_path(network, contract_name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ScriptError::ReadDeployments(e.to_string())),
        };

        let record: DeploymentRecord = serde_json::from_str(&contents)
            .map_err(|e| ScriptError::ReadDeployments(format!("{}: {}", path.display(), e)))?;

        if record.network != network || record.contract_name != contract_name {
            return Err(ScriptError::ReadDeployments(format!(
                "{} holds the record of {} on {}",
                path.display(),
                record.contract_name,
                record.network
            )));
        }

        Ok(Some(record))
    }

    /// Persist the given record, replacing any previous record for the same
    /// network and contract
    pub fn save(&self, record: &DeploymentRecord) -> Result<PathBuf, ScriptError> {
        let path = self.record_path(&record.network, &record.contract_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
        write_atomic(&path, json.as_bytes())?;

        Ok(path)
    }
}

/// Write to a temporary sibling file, then rename it into place
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ScriptError> {
    let tmp_path = path.with_extension(format!("{JSON_EXTENSION}.tmp"));
    fs::write(&tmp_path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::rename(&tmp_path, path).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256};

    use super::*;

    fn dummy_record(network: &str) -> DeploymentRecord {
        DeploymentRecord {
            contract_name: "TuringSubscriptionManager".to_string(),
            network: network.to_string(),
            chain_id: 288,
            address: address!("5FbDB2315678afecb367f032d93F642f64180aa3"),
            constructor_args: vec![address!("F8D2f1b0292C0Eeef80D8F47661A9DaCDB4b23bf")],
            deployer: address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            bytecode_hash: b256!(
                "1111111111111111111111111111111111111111111111111111111111111111"
            ),
            transaction_hash: None,
            compiler: CompilerSettings::default(),
        }
    }

    #[test]
    fn test_missing_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeploymentStore::new(dir.path());
        assert_eq!(store.load("boba", "TuringSubscriptionManager"), Ok(None));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeploymentStore::new(dir.path());
        let record = dummy_record("boba");

        let path = store.save(&record).unwrap();
        assert_eq!(
            path,
            dir.path().join("boba").join("TuringSubscriptionManager.json")
        );
        assert_eq!(
            store.load("boba", "TuringSubscriptionManager").unwrap(),
            Some(record)
        );
        // Records are kept per network
        assert_eq!(
            store.load("bobaRinkeby", "TuringSubscriptionManager"),
            Ok(None)
        );
    }

    #[test]
    fn test_corrupt_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeploymentStore::new(dir.path());
        let path = store.record_path("boba", "TuringSubscriptionManager");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            store.load("boba", "TuringSubscriptionManager"),
            Err(ScriptError::ReadDeployments(_))
        ));
    }

    #[test]
    fn test_misplaced_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeploymentStore::new(dir.path());
        let record = dummy_record("bobaRinkeby");
        let path = store.record_path("boba", "TuringSubscriptionManager");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

        assert!(store.load("boba", "TuringSubscriptionManager").is_err());
    }
}
