//! Loading of compiled contract artifacts and the exported ABIs derived from them

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::JsonAbi,
    primitives::{keccak256, Address, Bytes, B256},
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    constants::{JSON_EXTENSION, SOLIDITY_EXTENSION},
    errors::ScriptError,
};

/// The Solidity type of every constructor argument the scripts pass
const ADDRESS_SOL_TYPE: &str = "address";

/// A compiled contract, as emitted by the Solidity build
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// The name of the contract
    pub contract_name: String,
    /// The contract ABI
    pub abi: JsonAbi,
    /// The creation bytecode, without constructor arguments
    pub bytecode: Bytes,
}

impl Artifact {
    /// Parse an artifact from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let artifact: Artifact =
            serde_json::from_str(json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        if artifact.bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} has no creation bytecode",
                artifact.contract_name
            )));
        }

        Ok(artifact)
    }

    /// Load the artifact for the named contract from the artifacts directory
    pub fn load(artifacts_dir: &Path, contract_name: &str) -> Result<Self, ScriptError> {
        let path = find_artifact(artifacts_dir, contract_name)?;
        debug!("Loading artifact from {}", path.display());

        let json =
            fs::read_to_string(&path).map_err(|e| ScriptError::ReadArtifact(e.to_string()))?;
        let artifact = Self::from_json(&json)?;

        if artifact.contract_name != contract_name {
            return Err(ScriptError::ArtifactParsing(format!(
                "expected artifact for {}, found {}",
                contract_name, artifact.contract_name
            )));
        }

        Ok(artifact)
    }

    /// The creation bytecode with the given constructor arguments appended
    pub fn deploy_code(&self, constructor_args: &[Address]) -> Result<Bytes, ScriptError> {
        self.check_constructor_args(constructor_args)?;

        let encoded_args = DynSolValue::Tuple(
            constructor_args
                .iter()
                .copied()
                .map(DynSolValue::Address)
                .collect(),
        )
        .abi_encode_params();

        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(&encoded_args);
        Ok(code.into())
    }

    /// The hash identifying a deployment of this artifact with the given
    /// constructor arguments
    pub fn bytecode_hash(&self, constructor_args: &[Address]) -> Result<B256, ScriptError> {
        Ok(keccak256(self.deploy_code(constructor_args)?))
    }

    /// Write the artifact's ABI into the given directory, returning the path
    /// of the written file
    pub fn export_abi(&self, abi_dir: &Path) -> Result<PathBuf, ScriptError> {
        fs::create_dir_all(abi_dir).map_err(|e| ScriptError::WriteAbi(e.to_string()))?;

        let path = abi_dir
            .join(&self.contract_name)
            .with_extension(JSON_EXTENSION);
        let json = serde_json::to_string_pretty(&self.abi)
            .map_err(|e| ScriptError::WriteAbi(e.to_string()))?;
        fs::write(&path, json).map_err(|e| ScriptError::WriteAbi(e.to_string()))?;

        Ok(path)
    }

    /// Check the arguments against the constructor declared in the ABI
    fn check_constructor_args(&self, constructor_args: &[Address]) -> Result<(), ScriptError> {
        let inputs = self
            .abi
            .constructor()
            .map(|constructor| constructor.inputs.as_slice())
            .unwrap_or_default();

        if inputs.len() != constructor_args.len() {
            return Err(ScriptError::ConstructorArgs(format!(
                "{} takes {} constructor arguments, got {}",
                self.contract_name,
                inputs.len(),
                constructor_args.len()
            )));
        }

        if let Some(param) = inputs.iter().find(|param| param.ty != ADDRESS_SOL_TYPE) {
            return Err(ScriptError::ConstructorArgs(format!(
                "constructor argument `{}` of {} has type {}, expected {}",
                param.name, self.contract_name, param.ty, ADDRESS_SOL_TYPE
            )));
        }

        Ok(())
    }
}

/// Find the artifact file for the named contract.
///
/// Accepts both a flat `<dir>/<name>.json` layout and hardhat's nested
/// `<dir>/**/<name>.sol/<name>.json` layout.
fn find_artifact(artifacts_dir: &Path, contract_name: &str) -> Result<PathBuf, ScriptError> {
    let flat = artifacts_dir
        .join(contract_name)
        .with_extension(JSON_EXTENSION);
    if flat.is_file() {
        return Ok(flat);
    }

    find_nested_artifact(artifacts_dir, contract_name)?.ok_or_else(|| {
        ScriptError::ReadArtifact(format!(
            "no artifact for {} under {}",
            contract_name,
            artifacts_dir.display()
        ))
    })
}

/// Recursively search `dir` for `<name>.sol/<name>.json`
fn find_nested_artifact(dir: &Path, contract_name: &str) -> Result<Option<PathBuf>, ScriptError> {
    let source_dir_name = format!("{contract_name}.{SOLIDITY_EXTENSION}");
    let entries = fs::read_dir(dir).map_err(|e| ScriptError::ReadArtifact(e.to_string()))?;

    for entry in entries {
        let path = entry
            .map_err(|e| ScriptError::ReadArtifact(e.to_string()))?
            .path();
        if !path.is_dir() {
            continue;
        }

        if path.file_name().is_some_and(|name| name == source_dir_name.as_str()) {
            let candidate = path.join(contract_name).with_extension(JSON_EXTENSION);
            if candidate.is_file() {
                return Ok(Some(candidate));
            }
        }

        if let Some(found) = find_nested_artifact(&path, contract_name)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

#[cfg(test)]
pub(crate) mod test_helpers {
    /// A minimal artifact taking a single address constructor argument
    pub(crate) fn artifact_json(contract_name: &str, bytecode: &str) -> String {
        format!(
            r#"{{
                "_format": "hh-sol-artifact-1",
                "contractName": "{contract_name}",
                "sourceName": "contracts/{contract_name}.sol",
                "abi": [
                    {{
                        "type": "constructor",
                        "stateMutability": "nonpayable",
                        "inputs": [
                            {{ "name": "_turingCredit", "type": "address", "internalType": "address" }}
                        ]
                    }}
                ],
                "bytecode": "{bytecode}",
                "deployedBytecode": "0x"
            }}"#
        )
    }
}
