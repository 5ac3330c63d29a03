//! User settings for the ledger
//!
//! Which file holds the ledger, whether mutations are audited, and display
//! preferences.

use serde::{Deserialize, Serialize};

use super::paths::{LedgerPaths, DEFAULT_LEDGER_FILE};
use crate::error::LedgerError;
use crate::models::UNCATEGORIZED;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ledger file name, relative to the base directory
    #[serde(default = "default_ledger_file_name")]
    pub ledger_file_name: String,

    /// Whether adds and deletes are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Category used when none is given
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Currency symbol shown in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_ledger_file_name() -> String {
    DEFAULT_LEDGER_FILE.to_string()
}

fn default_audit_enabled() -> bool {
    true
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            ledger_file_name: default_ledger_file_name(),
            audit_enabled: default_audit_enabled(),
            default_category: default_category(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.ledger_file_name, "transactions.csv");
        assert!(settings.audit_enabled);
        assert_eq!(settings.default_category, "Uncategorized");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            ledger_file_name: "household.csv".into(),
            audit_enabled: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.ledger_file_name, "household.csv");
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"audit_enabled": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.audit_enabled);
        assert_eq!(loaded.ledger_file_name, "transactions.csv");
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
