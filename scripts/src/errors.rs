//! Definitions of errors that can occur during the execution of the deposit contract scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deposit contract scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error reading the contract artifact file
    ReadArtifact(String),
    /// Error parsing a contract artifact
    ArtifactParsing(String),
    /// Error fetching the signing accounts of the node
    AccountFetching(String),
    /// The node exposes no signing accounts
    NoAccounts,
    /// Error submitting the deployment transaction
    ContractDeployment(String),
    /// Error fetching the receipt of the deployment transaction
    ReceiptFetching(String),
    /// The deployment transaction was mined but did not yield a contract
    ContractResolution(String),
    /// Error writing a deployment output file
    WriteOutput(String),
    /// Error reading the contract address file
    ReadAddress(String),
    /// Error appending to the config file
    WriteConfig(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadArtifact(s) => write!(f, "error reading artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::AccountFetching(s) => write!(f, "error fetching accounts: {}", s),
            ScriptError::NoAccounts => write!(f, "node returned no signing accounts"),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ReceiptFetching(s) => write!(f, "error fetching receipt: {}", s),
            ScriptError::ContractResolution(s) => {
                write!(f, "error resolving deployed contract: {}", s)
            }
            ScriptError::WriteOutput(s) => write!(f, "error writing output: {}", s),
            ScriptError::ReadAddress(s) => write!(f, "error reading address file: {}", s),
            ScriptError::WriteConfig(s) => write!(f, "error writing config: {}", s),
        }
    }
}

impl Error for ScriptError {}
