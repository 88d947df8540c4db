//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The target network has no entry in the network profile table
    UnknownNetwork(String),
    /// The target network has no dependency address configured
    MissingDependency(String),
    /// The environment variable holding the deployer key is unset or empty
    MissingCredential(String),
    /// No signer accounts are available to deploy from
    NoSigners,
    /// Error reading a compilation artifact
    ReadArtifact(String),
    /// Error parsing a compilation artifact
    ArtifactParsing(String),
    /// The constructor arguments do not fit the artifact's constructor
    ConstructorArgs(String),
    /// Error reading a deployment record
    ReadDeployments(String),
    /// Error writing a deployment record
    WriteDeployments(String),
    /// Error writing an exported ABI
    WriteAbi(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error querying the chain
    ContractInteraction(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownNetwork(s) => write!(f, "unknown network: {}", s),
            ScriptError::MissingDependency(s) => {
                write!(f, "no dependency address configured for network: {}", s)
            }
            ScriptError::MissingCredential(s) => {
                write!(f, "deployer key environment variable not set: {}", s)
            }
            ScriptError::NoSigners => write!(f, "no signer accounts available"),
            ScriptError::ReadArtifact(s) => write!(f, "error reading artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ConstructorArgs(s) => write!(f, "invalid constructor arguments: {}", s),
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::WriteAbi(s) => write!(f, "error writing abi: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with chain: {}", s)
            }
        }
    }
}

impl Error for ScriptError {}
