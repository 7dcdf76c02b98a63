use clap::Parser;
use deposit_scripts::{cli::FillConfigCli, commands::fill_config, logging::init_logging};
use eyre::{Result, WrapErr};

fn main() -> Result<()> {
    let cli = FillConfigCli::parse();

    init_logging();

    fill_config(&cli).wrap_err("failed to fill the config file")?;

    Ok(())
}
