//! Constants used in the deposit contract scripts

/// The nonce used for the deployment transaction.
///
/// A nonce of 0 assumes the sending account has never sent a transaction.
pub const DEFAULT_DEPLOY_NONCE: u64 = 0;

/// The gas limit of the deployment transaction
pub const DEFAULT_DEPLOY_GAS_LIMIT: u64 = 3_141_592;

/// The gas price of the deployment transaction, in wei (147 gwei)
pub const DEFAULT_DEPLOY_GAS_PRICE: u128 = 147_000_000_000;

/// How often to poll the node for the deployment receipt, in milliseconds
pub const DEFAULT_RECEIPT_POLL_INTERVAL_MS: u64 = 100;

/// The index of the node account used as the deployer
pub const DEPLOYER_ACCOUNT_INDEX: usize = 0;

/// The key under which the deposit contract address is written to the config file
pub const DEPOSIT_CONTRACT_ADDRESS_KEY: &str = "DEPOSIT_CONTRACT_ADDRESS";

/// The stdout label preceding the deployment transaction hash
pub const TRANSACTION_LABEL: &str = "transaction";

/// The stdout label preceding the block number the deployment was included in
pub const BLOCK_NUMBER_LABEL: &str = "block_number";

/// The stdout label preceding the deployed contract address
pub const ADDRESS_LABEL: &str = "address";

/// The log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
