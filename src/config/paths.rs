//! Path management for the ledger
//!
//! ## Path Resolution Order
//!
//! 1. `LEDGER_CLI_DATA_DIR` environment variable (if set)
//! 2. `$XDG_CONFIG_HOME/ledger-cli` (if set)
//! 3. The platform config directory (`~/.config/ledger-cli`, `%APPDATA%\ledger-cli`, ...)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "LEDGER_CLI_DATA_DIR";

/// Default ledger file name
pub const DEFAULT_LEDGER_FILE: &str = "transactions.csv";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to a ledger file by name
    ///
    /// Absolute names are used as they are.
    pub fn ledger_file(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join("ledger-cli"));
    }

    ProjectDirs::from("", "", "ledger-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| LedgerError::Config("Could not determine a config directory".into()))
}
