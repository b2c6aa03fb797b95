use std::path::{Path, PathBuf};

use crate::error::BookResult;

/// Environment variable naming the address book database file.
pub const FILE_ENV_VAR: &str = "ABOOK_FILE";

pub const DEFAULT_DATA_DIR: &str = ".data";
pub const DEFAULT_FILE_NAME: &str = "address_book.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    /// Resolve from the `--file` flag, then `ABOOK_FILE`, then the default.
    pub fn resolve(file_flag: Option<PathBuf>) -> Self {
        let from_env = std::env::var_os(FILE_ENV_VAR)
            .map(PathBuf::from)
            .filter(|p| !p.as_os_str().is_empty());
        Self::resolve_with(file_flag, from_env)
    }

    pub fn resolve_with(file_flag: Option<PathBuf>, from_env: Option<PathBuf>) -> Self {
        let data_file = file_flag
            .or(from_env)
            .unwrap_or_else(|| Path::new(DEFAULT_DATA_DIR).join(DEFAULT_FILE_NAME));
        Self { data_file }
    }

    /// Create the directory holding the data file if it is missing.
    pub fn ensure_data_dir(&self) -> BookResult<()> {
        if let Some(dir) = self.data_file.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                log::info!("Creating data directory {}", dir.display());
                std::fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }
}
