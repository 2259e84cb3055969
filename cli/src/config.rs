//! Resolves call parameters from the optional JSON config file and flags.

use std::fs;
use std::path::Path;

use rest_core::CallParams;
use tracing::debug;

use crate::args::Cli;
use crate::error::CliError;

/// Read a JSON config file using the snake_case parameter keys.
pub fn load_file(path: &Path) -> Result<CallParams, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    CallParams::from_json(&raw).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Config file values, overridden by any non-empty flag.
pub fn resolve(cli: &Cli) -> Result<CallParams, CliError> {
    let base = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            load_file(path)?
        }
        None => CallParams::default(),
    };
    Ok(base.apply(cli.overrides()))
}
