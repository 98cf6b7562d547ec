use async_trait::async_trait;
use chrono::NaiveDate;
use ferrous_backup_domain::{BackupFile, DomainError};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The file was already gone.
    Missing,
}

#[async_trait]
pub trait BackupStore: Send + Sync {
    /// Files in `dir` whose name matches `pattern`, aged relative to `today`.
    async fn list_backups(
        &self,
        dir: &Path,
        pattern: &str,
        today: NaiveDate,
    ) -> Result<Vec<BackupFile>, DomainError>;

    async fn remove_backup(&self, path: &Path) -> Result<RemoveOutcome, DomainError>;
}
