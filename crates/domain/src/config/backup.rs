use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackupConfig {
    /// Database dumped when no name is given on the command line.
    #[serde(default = "default_database")]
    pub database: String,

    /// Directory receiving dumps and scanned by retention.
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            backup_dir: default_backup_dir(),
        }
    }
}

fn default_database() -> String {
    "postgres".to_string()
}

fn default_backup_dir() -> String {
    "./backups".to_string()
}
