//! Utilities for the deposit contract scripts.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};

use crate::{constants::DEPOSIT_CONTRACT_ADDRESS_KEY, errors::ScriptError, types::ContractArtifact};

/// Sets up the client through which the deployment is sent.
///
/// No wallet or fillers are attached: transactions are signed by the node
/// and every transaction field is set explicitly by the caller.
pub fn setup_provider(endpoint: Url) -> DynProvider {
    ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_http(endpoint)
        .erased()
}

/// Reads and parses the contract artifact at the given path
pub fn read_artifact(path: &Path) -> Result<ContractArtifact, ScriptError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ScriptError::ReadArtifact(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))
}

/// Writes a deployment output to the given path, replacing any previous contents.
///
/// The value is written as-is, without a trailing newline.
pub fn write_output(path: &Path, value: &str) -> Result<(), ScriptError> {
    fs::write(path, value)
        .map_err(|e| ScriptError::WriteOutput(format!("{}: {}", path.display(), e)))
}

/// Reads the raw contents of the contract address file, without trimming
pub fn read_address_file(path: &Path) -> Result<Vec<u8>, ScriptError> {
    fs::read(path).map_err(|e| ScriptError::ReadAddress(format!("{}: {}", path.display(), e)))
}

/// Formats the config entry for the given address: `DEPOSIT_CONTRACT_ADDRESS: "<address>"`.
///
/// The address bytes are copied verbatim and no newline is added.
pub fn config_line(address: &[u8]) -> Vec<u8> {
    let prefix = format!("{DEPOSIT_CONTRACT_ADDRESS_KEY}: \"");
    [prefix.as_bytes(), address, b"\""].concat()
}

/// Appends the given bytes to the end of the file, creating it if needed
pub fn append_to_file(path: &Path, contents: &[u8]) -> Result<(), ScriptError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(contents))
        .map_err(|e| ScriptError::WriteConfig(format!("{}: {}", path.display(), e)))
}
