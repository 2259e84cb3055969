//! Output artifacts consumed by the next pipeline step.

use std::fs;
use std::path::PathBuf;

use crate::error::CliError;

pub const RESPONSE_FILE: &str = "response";
pub const ERROR_FILE: &str = "error";

#[derive(Debug, Clone)]
pub struct OutputDir {
    dir: PathBuf,
}

impl OutputDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn write_response(&self, body: &[u8]) -> Result<PathBuf, CliError> {
        self.write(RESPONSE_FILE, body)
    }

    pub fn write_error(&self, message: &str) -> Result<PathBuf, CliError> {
        self.write(ERROR_FILE, message.as_bytes())
    }

    fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf, CliError> {
        let path = self.dir.join(name);
        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(&path, contents))
            .map_err(|source| CliError::Output {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}
