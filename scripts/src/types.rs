//! Type definitions used throughout the scripts

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash},
    rpc::types::TransactionRequest,
};
use serde::Deserialize;
use serde_json::Value;

use crate::constants::{DEFAULT_DEPLOY_GAS_LIMIT, DEFAULT_DEPLOY_GAS_PRICE, DEFAULT_DEPLOY_NONCE};

/// A compiled contract, as emitted by the Solidity toolchain.
///
/// Any fields besides `abi` and `bytecode` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    /// The interface description of the contract.
    ///
    /// Only required to be an array, its items are never inspected.
    pub abi: Vec<Value>,
    /// The deployment payload of the contract, hex-encoded on disk
    pub bytecode: Bytes,
}

/// A handle on a contract that has not been deployed yet
#[derive(Debug, Clone)]
pub struct UndeployedContract {
    /// The interface description of the contract
    abi: Vec<Value>,
    /// The deployment payload of the contract
    bytecode: Bytes,
}

impl UndeployedContract {
    /// Build the handle from a parsed artifact
    pub fn new(artifact: ContractArtifact) -> Self {
        Self {
            abi: artifact.abi,
            bytecode: artifact.bytecode,
        }
    }

    /// The interface description of the contract
    pub fn abi(&self) -> &[Value] {
        &self.abi
    }

    /// The deployment payload of the contract
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Build the deployment transaction sent from `from` under the given policy.
    ///
    /// The transaction is left unsigned, the node signs it with the account of `from`.
    pub fn deploy_tx(&self, from: Address, params: &DeployTxParams) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(from)
            .with_deploy_code(self.bytecode.clone())
            .with_nonce(params.nonce)
            .with_gas_limit(params.gas_limit)
            .with_gas_price(params.gas_price)
    }
}

/// The fixed transaction policy applied to the deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployTxParams {
    /// The sender nonce
    pub nonce: u64,
    /// The gas limit
    pub gas_limit: u64,
    /// The gas price, in wei
    pub gas_price: u128,
}

impl Default for DeployTxParams {
    fn default() -> Self {
        Self {
            nonce: DEFAULT_DEPLOY_NONCE,
            gas_limit: DEFAULT_DEPLOY_GAS_LIMIT,
            gas_price: DEFAULT_DEPLOY_GAS_PRICE,
        }
    }
}

/// The outcome of a successful deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentResult {
    /// The hash of the deployment transaction
    pub transaction_hash: TxHash,
    /// The number of the block the deployment was included in
    pub block_number: u64,
    /// The address of the deployed contract
    pub contract_address: Address,
}
