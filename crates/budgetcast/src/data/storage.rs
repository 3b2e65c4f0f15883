//! Data directory storage
//!
//! Directory structure:
//! ~/.budgetcast/
//!   config.yaml          # Preferences (ledger file, output format)
//!   ledger.yaml          # Accounts, movements and exceptions
//!   budgetcast.log       # Log output

use std::fs;
use std::path::{Path, PathBuf};

use budgetcast_core::config::{DuplicateId, Ledger};

use crate::cli::OutputFormat;

const DEFAULT_LEDGER_FILE: &str = "ledger.yaml";

/// Configuration stored in config.yaml
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct DataConfig {
    /// Ledger file name, relative to the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger: Option<String>,

    /// Output format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

/// Error types for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid ledger {path}: {id}")]
    DuplicateId { path: PathBuf, id: DuplicateId },

    #[error("Ledger not found at {0} (run `budgetcast init` to create one)")]
    LedgerMissing(PathBuf),
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Manages the data directory holding config and ledger files
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.budgetcast/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".budgetcast")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    /// Ledger path named by the config, or `ledger.yaml`
    pub fn ledger_path(&self, config: &DataConfig) -> PathBuf {
        let name = config
            .ledger
            .as_deref()
            .map(sanitize_filename)
            .unwrap_or_else(|| DEFAULT_LEDGER_FILE.to_string());
        self.root.join(name)
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Create the data directory if needed
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|e| StorageError::io(&self.root, e))
    }

    /// Load config.yaml, falling back to defaults when it does not exist
    pub fn load_config(&self) -> Result<DataConfig, StorageError> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(DataConfig::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
        serde_saphyr::from_str(&content).map_err(|e| StorageError::Parse {
            path,
            message: e.to_string(),
        })
    }

    pub fn save_config(&self, config: &DataConfig) -> Result<(), StorageError> {
        self.init()?;
        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {e}")))?;

        let path = self.config_path();
        fs::write(&path, yaml).map_err(|e| StorageError::io(&path, e))
    }

    /// Read a ledger file
    pub fn load_ledger(&self, path: &Path) -> Result<Ledger, StorageError> {
        if !path.exists() {
            return Err(StorageError::LedgerMissing(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
        let ledger: Ledger = serde_saphyr::from_str(&content).map_err(|e| StorageError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let Some(id) = ledger.duplicate_id() {
            return Err(StorageError::DuplicateId {
                path: path.to_path_buf(),
                id,
            });
        }

        tracing::info!(
            path = %path.display(),
            accounts = ledger.accounts.len(),
            "ledger loaded"
        );
        Ok(ledger)
    }

    /// Write a ledger file, creating parent directories as needed
    pub fn save_ledger(&self, path: &Path, ledger: &Ledger) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }
        let yaml = serde_saphyr::to_string(ledger)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize ledger: {e}")))?;

        fs::write(path, yaml).map_err(|e| StorageError::io(path, e))
    }
}

/// Keep ledger names inside the data directory
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_start_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::sample_ledger;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().join(".budgetcast"));

        assert!(!data_dir.exists());
        data_dir.init().unwrap();
        assert!(data_dir.exists());
    }

    #[test]
    fn test_missing_config_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());

        assert_eq!(data_dir.load_config().unwrap(), DataConfig::default());
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().join("data"));

        let config = DataConfig {
            ledger: Some("household.yaml".into()),
            format: Some(OutputFormat::Json),
        };
        data_dir.save_config(&config).unwrap();

        assert_eq!(data_dir.load_config().unwrap(), config);
        assert_eq!(
            data_dir.ledger_path(&config),
            temp_dir.path().join("data").join("household.yaml")
        );
    }

    #[test]
    fn test_ledger_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());
        let path = data_dir.ledger_path(&DataConfig::default());

        let ledger = sample_ledger(jiff::civil::date(2025, 3, 14));
        data_dir.save_ledger(&path, &ledger).unwrap();

        assert_eq!(data_dir.load_ledger(&path).unwrap(), ledger);
    }

    #[test]
    fn test_ledger_from_handwritten_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());
        let path = temp_dir.path().join("ledger.yaml");
        fs::write(
            &path,
            "accounts:\n\
             \x20 - id: 3\n\
             \x20   name: Checking\n\
             \x20   created_at: 2024-01-01\n\
             \x20   rate_of_pay: \"0.0000\"\n\
             \x20   movements:\n\
             \x20     - id: 1\n\
             \x20       type: income\n\
             \x20       amount: \"1000.00\"\n\
             \x20       frequency_type: every_n_months\n\
             \x20       frequency_n: 1\n\
             \x20       start_date: 2024-01-15\n\
             \x20       exceptions:\n\
             \x20         - amount: \"500.00\"\n\
             \x20           frequency_type: once\n\
             \x20           start_date: 2024-02-10\n",
        )
        .unwrap();

        let ledger = data_dir.load_ledger(&path).unwrap();
        let account = &ledger.accounts[0];
        assert_eq!(account.name, "Checking");
        assert_eq!(account.movements[0].exceptions.len(), 1);

        let result =
            budgetcast_core::forecast_account(account, jiff::civil::date(2024, 3, 1)).unwrap();
        assert_eq!(result.balance, rust_decimal_macros::dec!(2500));
    }

    #[test]
    fn test_missing_ledger_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());
        let err = data_dir
            .load_ledger(&temp_dir.path().join("nope.yaml"))
            .unwrap_err();
        assert!(matches!(err, StorageError::LedgerMissing(_)));
    }

    #[test]
    fn test_duplicate_account_ids_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());
        let path = temp_dir.path().join("ledger.yaml");
        fs::write(
            &path,
            r#"accounts:
  - id: 4
    name: Checking
    created_at: 2024-01-01
  - id: 4
    name: Savings
    created_at: 2024-01-01
"#,
        )
        .unwrap();

        let err = data_dir.load_ledger(&path).unwrap_err();
        assert!(matches!(
            err,
            StorageError::DuplicateId {
                id: DuplicateId::Account(budgetcast_core::model::AccountId(4)),
                ..
            }
        ));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("ledger.yaml"), "ledger.yaml");
        assert_eq!(sanitize_filename("../etc/passwd"), "_etc_passwd");
        assert_eq!(sanitize_filename("with spaces.yaml"), "with spaces.yaml");
    }
}
