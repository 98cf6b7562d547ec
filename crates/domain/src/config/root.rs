use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::backup::BackupConfig;
use super::dump::DumpConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::retention::RetentionConfig;
use crate::dump::DumpSettings;
use crate::retention::RetentionPolicy;

const LOCAL_CONFIG_PATH: &str = "ferrous-backup.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-backup/config.toml";

/// Main configuration structure for Ferrous Backup
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Target database and backup directory
    #[serde(default)]
    pub backup: BackupConfig,

    /// External dump tool invocation
    #[serde(default)]
    pub dump: DumpConfig,

    /// Daily/weekly/monthly retention quotas
    #[serde(default)]
    pub retention: RetentionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-backup.toml in current directory
    /// 3. /etc/ferrous-backup/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(database) = overrides.database {
            self.backup.database = database;
        }
        if let Some(dir) = overrides.backup_dir {
            self.backup.backup_dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backup.database.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Database name cannot be empty".to_string(),
            ));
        }
        if self.backup.backup_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Backup directory cannot be empty".to_string(),
            ));
        }
        if self.retention.name_pattern.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Retention name pattern cannot be empty".to_string(),
            ));
        }
        if self.dump.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Dump program cannot be empty".to_string(),
            ));
        }
        if self.dump.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Dump timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| std::path::Path::new(candidate).exists())
            .map(str::to_string)
    }

    pub fn retention_policy(&self) -> RetentionPolicy {
        RetentionPolicy::new(&self.backup.backup_dir)
            .with_quotas(
                self.retention.daily,
                self.retention.weekly,
                self.retention.monthly,
            )
            .with_name_pattern(self.retention.name_pattern.clone())
    }

    pub fn dump_settings(&self) -> DumpSettings {
        DumpSettings {
            program: PathBuf::from(&self.dump.program),
            format: self.dump.format.clone(),
            username: self.dump.username.clone(),
            password: self.dump.password.clone(),
            backup_dir: PathBuf::from(&self.backup.backup_dir),
            timeout: Duration::from_secs(self.dump.timeout_secs),
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database: Option<String>,
    pub backup_dir: Option<String>,
    pub log_level: Option<String>,
}
