//! Implementations of the deposit contract scripts

use std::path::Path;

use alloy::providers::Provider;
use tracing::{info, warn};

use crate::{
    cli::{DeployCli, FillConfigCli},
    constants::{ADDRESS_LABEL, BLOCK_NUMBER_LABEL, DEFAULT_DEPLOY_NONCE, TRANSACTION_LABEL},
    deployer::Deployer,
    errors::ScriptError,
    types::{DeployTxParams, DeploymentResult, UndeployedContract},
    utils::{
        append_to_file, config_line, read_address_file, read_artifact, setup_provider,
        write_output,
    },
};

/// Deploy the deposit contract described by the CLI arguments.
///
/// The artifact is parsed before the endpoint is contacted.
pub async fn deploy_deposit_contract(cli: DeployCli) -> Result<DeploymentResult, ScriptError> {
    let poll_interval = cli.poll_interval();
    let DeployCli {
        endpoint,
        file,
        address_out,
        block_out,
        tx,
        ..
    } = cli;

    let artifact = read_artifact(&file)?;
    let contract = UndeployedContract::new(artifact);
    info!(
        "loaded artifact {} ({} bytes of bytecode, {} ABI items)",
        file.display(),
        contract.bytecode().len(),
        contract.abi().len()
    );

    let provider = setup_provider(endpoint);
    let deployer = Deployer::new(provider, DeployTxParams::from(tx), poll_interval);

    deploy_and_record(&deployer, &contract, &address_out, &block_out).await
}

/// Run the deployment and persist its results.
///
/// The block number is written as soon as the transaction is mined and the
/// address once the contract is confirmed. A failed write leaves the
/// broadcast transaction in place.
pub async fn deploy_and_record<P: Provider>(
    deployer: &Deployer<P>,
    contract: &UndeployedContract,
    address_out: &Path,
    block_out: &Path,
) -> Result<DeploymentResult, ScriptError> {
    let params = deployer.params();
    if let Some(msg) = fresh_account_warning(params) {
        warn!("{msg}");
    }
    info!(
        "transaction policy: nonce {}, gas limit {}, gas price {} wei",
        params.nonce, params.gas_limit, params.gas_price
    );

    let sender = deployer.sender().await?;
    info!("deploying from {sender}");

    let transaction_hash = deployer.broadcast(contract, sender).await?;
    println!("{TRANSACTION_LABEL} {transaction_hash}");

    let receipt = deployer.wait_for_receipt(transaction_hash).await?;
    let block_number = receipt.block_number.ok_or_else(|| {
        ScriptError::ReceiptFetching(format!("receipt of {transaction_hash} has no block number"))
    })?;
    println!("{BLOCK_NUMBER_LABEL} {block_number}");
    write_output(block_out, &block_number.to_string())?;
    info!("block number written to {}", block_out.display());

    let contract_address = deployer.resolve_contract(&receipt).await?;
    println!("{ADDRESS_LABEL} {contract_address}");
    write_output(address_out, &contract_address.to_checksum(None))?;
    info!("contract address written to {}", address_out.display());

    Ok(DeploymentResult {
        transaction_hash,
        block_number,
        contract_address,
    })
}

/// The precondition the default nonce places on the deployer account, if it applies
fn fresh_account_warning(params: &DeployTxParams) -> Option<String> {
    (params.nonce == DEFAULT_DEPLOY_NONCE).then(|| {
        format!(
            "deploying with nonce {DEFAULT_DEPLOY_NONCE}, the deployer account must not have sent any transaction"
        )
    })
}

/// Append the deposit contract address to the config file
pub fn fill_config(cli: &FillConfigCli) -> Result<(), ScriptError> {
    let address = read_address_file(&cli.address_file)?;
    append_to_file(&cli.config_file, &config_line(&address))?;

    info!(
        "appended deposit contract address to {}",
        cli.config_file.display()
    );
    Ok(())
}
