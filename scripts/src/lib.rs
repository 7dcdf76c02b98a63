//! Scripts for deploying the deposit contract to a devnet and wiring its
//! address into the consensus client configuration.

#![deny(missing_docs)]

pub mod cli;
pub mod commands;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod logging;
pub mod types;
pub mod utils;
