//! Definitions of CLI arguments for the deposit contract scripts

use std::{path::PathBuf, time::Duration};

use alloy::transports::http::reqwest::Url;
use clap::{Args, Parser};

use crate::{
    constants::{
        DEFAULT_DEPLOY_GAS_LIMIT, DEFAULT_DEPLOY_GAS_PRICE, DEFAULT_DEPLOY_NONCE,
        DEFAULT_RECEIPT_POLL_INTERVAL_MS,
    },
    types::DeployTxParams,
};

/// Deploy the deposit contract and record its address and block number.
#[derive(Parser, Debug)]
#[command(name = "deploy-deposit-contract")]
pub struct DeployCli {
    /// HTTP endpoint to which the deposit contract is deployed
    #[arg(long)]
    pub endpoint: Url,

    /// Deposit contract JSON file path, containing `abi` and `bytecode`
    #[arg(short, long)]
    pub file: PathBuf,

    /// The file path to write the contract address to
    #[arg(long)]
    pub address_out: PathBuf,

    /// The file path to write the contract block number to
    #[arg(long)]
    pub block_out: PathBuf,

    /// The transaction policy of the deployment
    #[command(flatten)]
    pub tx: TxPolicyArgs,

    /// How often to poll the node for the deployment receipt, in milliseconds
    #[arg(
        long,
        env = "DEPLOY_POLL_INTERVAL_MS",
        default_value_t = DEFAULT_RECEIPT_POLL_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval_ms: u64,
}

impl DeployCli {
    /// The interval at which the deployment receipt is polled
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// The fixed transaction policy of the deployment.
///
/// None of these values are derived from network conditions.
#[derive(Args, Debug, Clone)]
pub struct TxPolicyArgs {
    /// Nonce of the deployment transaction.
    ///
    /// The default of 0 requires that the first node account has never sent
    /// a transaction; the node rejects the deployment otherwise.
    #[arg(long, env = "DEPLOY_NONCE", default_value_t = DEFAULT_DEPLOY_NONCE)]
    pub nonce: u64,

    /// Gas limit of the deployment transaction
    #[arg(long, env = "DEPLOY_GAS_LIMIT", default_value_t = DEFAULT_DEPLOY_GAS_LIMIT)]
    pub gas_limit: u64,

    /// Gas price of the deployment transaction, in wei
    #[arg(long, env = "DEPLOY_GAS_PRICE", default_value_t = DEFAULT_DEPLOY_GAS_PRICE)]
    pub gas_price: u128,
}

impl From<TxPolicyArgs> for DeployTxParams {
    fn from(args: TxPolicyArgs) -> Self {
        DeployTxParams {
            nonce: args.nonce,
            gas_limit: args.gas_limit,
            gas_price: args.gas_price,
        }
    }
}

/// Append the deposit contract address to a consensus client config file.
#[derive(Parser, Debug)]
#[command(name = "fill-lighthouse-config")]
pub struct FillConfigCli {
    /// Deposit contract address file
    #[arg(long)]
    pub address_file: PathBuf,

    /// Config file to append the address to
    #[arg(long)]
    pub config_file: PathBuf,
}
