//! The deployment round-trip against a JSON-RPC node.
//!
//! Every step is a single awaited request, in order: list the node accounts,
//! broadcast the deployment, poll for its receipt, then check that code was
//! stored at the resulting address. Nothing is retried.

use std::time::Duration;

use alloy::{
    primitives::{Address, TxHash},
    providers::Provider,
    rpc::types::TransactionReceipt,
};
use tracing::{debug, info};

use crate::{
    constants::DEPLOYER_ACCOUNT_INDEX,
    errors::ScriptError,
    types::{DeployTxParams, UndeployedContract},
};

/// Sends a contract deployment through a node holding unlocked accounts
pub struct Deployer<P> {
    /// The client connected to the node
    provider: P,
    /// The transaction policy applied to the deployment
    params: DeployTxParams,
    /// The interval at which the receipt is polled
    poll_interval: Duration,
}

impl<P: Provider> Deployer<P> {
    /// Create a new deployer
    pub fn new(provider: P, params: DeployTxParams, poll_interval: Duration) -> Self {
        Self {
            provider,
            params,
            poll_interval,
        }
    }

    /// The transaction policy applied to the deployment
    pub fn params(&self) -> &DeployTxParams {
        &self.params
    }

    /// Fetch the node accounts and select the deployer
    pub async fn sender(&self) -> Result<Address, ScriptError> {
        let accounts = self
            .provider
            .get_accounts()
            .await
            .map_err(|e| ScriptError::AccountFetching(e.to_string()))?;
        debug!("node exposes {} account(s)", accounts.len());

        accounts
            .get(DEPLOYER_ACCOUNT_INDEX)
            .copied()
            .ok_or(ScriptError::NoAccounts)
    }

    /// Submit the deployment transaction, returning its hash once the node accepts it
    pub async fn broadcast(
        &self,
        contract: &UndeployedContract,
        from: Address,
    ) -> Result<TxHash, ScriptError> {
        let tx = contract.deploy_tx(from, &self.params);
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        Ok(*pending.tx_hash())
    }

    /// Poll the node until the transaction is included in a block.
    ///
    /// There is no upper bound on the wait.
    pub async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<TransactionReceipt, ScriptError> {
        loop {
            let receipt = self
                .provider
                .get_transaction_receipt(tx_hash)
                .await
                .map_err(|e| ScriptError::ReceiptFetching(e.to_string()))?;

            match receipt {
                Some(receipt) => return Ok(receipt),
                None => {
                    debug!("transaction {tx_hash} not yet included");
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
    }

    /// Resolve the address of the contract created by a mined deployment.
    ///
    /// Fails if the transaction reverted or no code was stored at the address.
    pub async fn resolve_contract(
        &self,
        receipt: &TransactionReceipt,
    ) -> Result<Address, ScriptError> {
        if !receipt.status() {
            return Err(ScriptError::ContractResolution(format!(
                "transaction {} reverted",
                receipt.transaction_hash
            )));
        }

        let address = receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractResolution(format!(
                "receipt of {} has no contract address",
                receipt.transaction_hash
            ))
        })?;

        let code = self
            .provider
            .get_code_at(address)
            .await
            .map_err(|e| ScriptError::ContractResolution(e.to_string()))?;
        if code.is_empty() {
            return Err(ScriptError::ContractResolution(format!(
                "no code stored at {address}, check the gas limit"
            )));
        }

        info!("{} bytes of code stored at {address}", code.len());
        Ok(address)
    }
}


#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, b256, bytes, Bytes, B256},
        providers::mock::Asserter,
    };
    use serde_json::Value;

    use super::{test_helpers::*, *};
    use crate::types::ContractArtifact;

    const SENDER: Address = address!("0x1111111111111111111111111111111111111111");
    const CONTRACT: Address = address!("0x4242424242424242424242424242424242424242");
    const TX_HASH: B256 =
        b256!("0xe75fb554e433e03763a1560646ee22dcb74e5274b34c5ad644e7c0f619a7e1d0");

    fn contract() -> UndeployedContract {
        UndeployedContract::new(ContractArtifact {
            abi: Vec::new(),
            bytecode: bytes!("6080604052"),
        })
    }

    fn deployer(asserter: &Asserter) -> Deployer<impl Provider> {
        Deployer::new(
            mock_provider(asserter),
            DeployTxParams::default(),
            Duration::from_millis(1),
        )
    }

    #[tokio::test]
    async fn test_sender_is_first_account() {
        let asserter = Asserter::new();
        asserter.push_success(&vec![SENDER, CONTRACT]);

        let sender = deployer(&asserter).sender().await.unwrap();
        assert_eq!(sender, SENDER);
    }

    #[tokio::test]
    async fn test_sender_no_accounts() {
        let asserter = Asserter::new();
        asserter.push_success(&Vec::<Address>::new());

        let res = deployer(&asserter).sender().await;
        assert!(matches!(res, Err(ScriptError::NoAccounts)));
    }

    #[tokio::test]
    async fn test_broadcast_returns_hash() {
        let asserter = Asserter::new();
        asserter.push_success(&TX_HASH);

        let hash = deployer(&asserter)
            .broadcast(&contract(), SENDER)
            .await
            .unwrap();
        assert_eq!(hash, TX_HASH);
    }

    #[tokio::test]
    async fn test_broadcast_rejected() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("nonce too low");

        let res = deployer(&asserter).broadcast(&contract(), SENDER).await;
        assert!(matches!(res, Err(ScriptError::ContractDeployment(_))));
    }

    #[tokio::test]
    async fn test_wait_for_receipt_polls_until_mined() {
        let asserter = Asserter::new();
        asserter.push_success(&Value::Null);
        asserter.push_success(&Value::Null);
        asserter.push_success(&receipt_json(TX_HASH, SENDER, 7, CONTRACT, true));

        let receipt = deployer(&asserter).wait_for_receipt(TX_HASH).await.unwrap();
        assert_eq!(receipt.transaction_hash, TX_HASH);
        assert_eq!(receipt.block_number, Some(7));
        assert_eq!(receipt.contract_address, Some(CONTRACT));
    }

    #[tokio::test]
    async fn test_wait_for_receipt_transport_error() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("connection reset");

        let res = deployer(&asserter).wait_for_receipt(TX_HASH).await;
        assert!(matches!(res, Err(ScriptError::ReceiptFetching(_))));
    }

    #[tokio::test]
    async fn test_resolve_contract() {
        let asserter = Asserter::new();
        asserter.push_success(&receipt_json(TX_HASH, SENDER, 7, CONTRACT, true));
        asserter.push_success(&bytes!("6080604052"));

        let deployer = deployer(&asserter);
        let receipt = deployer.wait_for_receipt(TX_HASH).await.unwrap();
        let address = deployer.resolve_contract(&receipt).await.unwrap();
        assert_eq!(address, CONTRACT);
    }

    #[tokio::test]
    async fn test_resolve_contract_reverted() {
        let asserter = Asserter::new();
        asserter.push_success(&receipt_json(TX_HASH, SENDER, 7, CONTRACT, false));

        let deployer = deployer(&asserter);
        let receipt = deployer.wait_for_receipt(TX_HASH).await.unwrap();
        let res = deployer.resolve_contract(&receipt).await;
        assert!(matches!(res, Err(ScriptError::ContractResolution(_))));
    }

    #[tokio::test]
    async fn test_resolve_contract_without_code() {
        let asserter = Asserter::new();
        asserter.push_success(&receipt_json(TX_HASH, SENDER, 7, CONTRACT, true));
        asserter.push_success(&Bytes::new());

        let deployer = deployer(&asserter);
        let receipt = deployer.wait_for_receipt(TX_HASH).await.unwrap();
        let res = deployer.resolve_contract(&receipt).await;
        assert!(matches!(res, Err(ScriptError::ContractResolution(_))));
    }
}
