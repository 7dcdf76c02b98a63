use clap::Parser;
use deposit_scripts::{cli::DeployCli, commands::deploy_deposit_contract, logging::init_logging};
use eyre::{Result, WrapErr};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = DeployCli::parse();

    init_logging();

    deploy_deposit_contract(cli)
        .await
        .wrap_err("failed to deploy the deposit contract")?;

    Ok(())
}
