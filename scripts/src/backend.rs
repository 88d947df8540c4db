//! The chain-facing side of a deployment: sending contract creation
//! transactions and inspecting deployed code

use std::future::Future;

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, Bytes, B256},
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use tracing::debug;

use crate::errors::ScriptError;

/// The outcome of a mined contract creation transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentDeployment {
    /// The address of the created contract
    pub address: Address,
    /// The hash of the creation transaction
    pub transaction_hash: B256,
}

/// A connection to a network through which contracts are deployed
pub trait DeploymentBackend {
    /// The signer accounts available on the network, in order
    fn accounts(&self) -> Vec<Address>;

    /// The chain ID of the network
    fn chain_id(&self) -> impl Future<Output = Result<u64, ScriptError>> + Send;

    /// The runtime code at the given address, empty if there is none
    fn code_at(&self, address: Address)
        -> impl Future<Output = Result<Bytes, ScriptError>> + Send;

    /// Send a contract creation transaction from the given account and wait
    /// for it to be mined
    fn send_deployment(
        &self,
        from: Address,
        deploy_code: Bytes,
    ) -> impl Future<Output = Result<SentDeployment, ScriptError>> + Send;
}

/// A [`DeploymentBackend`] talking to a JSON-RPC node, signing locally
#[derive(Clone)]
pub struct RpcBackend {
    /// The wallet-filled provider
    provider: DynProvider<Ethereum>,
    /// The addresses of the signers attached to the provider
    signers: Vec<Address>,
}

impl RpcBackend {
    /// Wrap a provider whose wallet holds the given signers
    pub fn new(provider: DynProvider<Ethereum>, signers: Vec<Address>) -> Self {
        Self { provider, signers }
    }
}

impl DeploymentBackend for RpcBackend {
    fn accounts(&self) -> Vec<Address> {
        self.signers.clone()
    }

    async fn chain_id(&self) -> Result<u64, ScriptError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| ScriptError::ClientInitialization(e.to_string()))
    }

    async fn code_at(&self, address: Address) -> Result<Bytes, ScriptError> {
        self.provider
            .get_code_at(address)
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
    }

    async fn send_deployment(
        &self,
        from: Address,
        deploy_code: Bytes,
    ) -> Result<SentDeployment, ScriptError> {
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_deploy_code(deploy_code);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        debug!("Sent deployment transaction {:#x}", pending.tx_hash());

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        if !receipt.status() {
            return Err(ScriptError::ContractDeployment(format!(
                "transaction {:#x} reverted",
                receipt.transaction_hash
            )));
        }

        let address = receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(format!(
                "no contract address in receipt of {:#x}",
                receipt.transaction_hash
            ))
        })?;

        Ok(SentDeployment {
            address,
            transaction_hash: receipt.transaction_hash,
        })
    }
}
