use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate};
use ferrous_backup_application::ports::{BackupStore, RemoveOutcome};
use ferrous_backup_domain::{BackupFile, DomainError};
use glob::{MatchOptions, Pattern};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Backup store over a local directory. Only file names and modification
/// times are read; contents are never opened.
pub struct FsBackupStore;

impl FsBackupStore {
    pub fn new() -> Self {
        Self
    }

    fn compile_pattern(pattern: &str) -> Result<Pattern, DomainError> {
        Pattern::new(pattern).map_err(|e| DomainError::InvalidNamePattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
    }
}

impl Default for FsBackupStore {
    fn default() -> Self {
        Self::new()
    }
}

// Hidden files are only matched by patterns that name the leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

#[async_trait]
impl BackupStore for FsBackupStore {
    async fn list_backups(
        &self,
        dir: &Path,
        pattern: &str,
        today: NaiveDate,
    ) -> Result<Vec<BackupFile>, DomainError> {
        let matcher = Self::compile_pattern(pattern)?;
        let unreadable = |e: std::io::Error| DomainError::BackupDirUnreadable {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        };

        let mut entries = fs::read_dir(dir).await.map_err(unreadable)?;
        let mut backups = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                debug!(path = %entry.path().display(), "Skipping backup with non UTF-8 name");
                continue;
            };
            if !matcher.matches_with(name, MATCH_OPTIONS) {
                continue;
            }

            let path = entry.path();
            let metadata = match fs::metadata(&path).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    // Removed between listing and stat.
                    debug!(path = %path.display(), error = %e, "Skipping unreadable backup");
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }

            let modified = match metadata.modified() {
                Ok(modified) => DateTime::<Local>::from(modified).date_naive(),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Backup has no modification time");
                    continue;
                }
            };

            backups.push(BackupFile::from_modified(path, modified, today));
        }

        debug!(dir = %dir.display(), pattern, found = backups.len(), "Backup directory scanned");
        Ok(backups)
    }

    async fn remove_backup(&self, path: &Path) -> Result<RemoveOutcome, DomainError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(RemoveOutcome::Removed),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(RemoveOutcome::Missing),
            Err(e) => Err(DomainError::IoError(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
