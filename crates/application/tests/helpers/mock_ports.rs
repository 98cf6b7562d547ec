#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use ferrous_backup_application::ports::{BackupReporter, BackupStore, DumpRunner, RemoveOutcome};
use ferrous_backup_domain::{
    BackupFile, DomainError, DumpCommand, DumpError, DumpOutput, RetentionReport,
};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub struct MockBackupStore {
    files: Arc<RwLock<BTreeMap<PathBuf, u32>>>,
    locked: Arc<RwLock<HashSet<PathBuf>>>,
    vanished: Arc<RwLock<HashSet<PathBuf>>>,
    removal_order: Arc<RwLock<Vec<PathBuf>>>,
    should_fail_listing: Arc<RwLock<bool>>,
}

impl MockBackupStore {
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(BTreeMap::new())),
            locked: Arc::new(RwLock::new(HashSet::new())),
            vanished: Arc::new(RwLock::new(HashSet::new())),
            removal_order: Arc::new(RwLock::new(Vec::new())),
            should_fail_listing: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn with_ages(dir: &str, ages: &[u32]) -> Self {
        let store = Self::new();
        for age in ages {
            store.add_backup(&backup_path(dir, *age), *age).await;
        }
        store
    }

    pub async fn add_backup(&self, path: &Path, age_days: u32) {
        self.files.write().await.insert(path.to_path_buf(), age_days);
    }

    /// Deleting this path fails as if permission were denied.
    pub async fn lock(&self, path: &Path) {
        self.locked.write().await.insert(path.to_path_buf());
    }

    /// This path disappears between listing and deletion.
    pub async fn vanish_before_delete(&self, path: &Path) {
        self.vanished.write().await.insert(path.to_path_buf());
    }

    pub async fn set_should_fail_listing(&self, fail: bool) {
        *self.should_fail_listing.write().await = fail;
    }

    pub async fn count(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn remaining_ages(&self) -> Vec<u32> {
        let mut ages: Vec<u32> = self.files.read().await.values().copied().collect();
        ages.sort_unstable();
        ages
    }

    pub async fn removal_order(&self) -> Vec<PathBuf> {
        self.removal_order.read().await.clone()
    }
}

pub fn backup_path(dir: &str, age_days: u32) -> PathBuf {
    PathBuf::from(dir).join(format!("db-age-{:03}.backup", age_days))
}

#[async_trait]
impl BackupStore for MockBackupStore {
    async fn list_backups(
        &self,
        dir: &Path,
        pattern: &str,
        _today: NaiveDate,
    ) -> Result<Vec<BackupFile>, DomainError> {
        if *self.should_fail_listing.read().await {
            return Err(DomainError::BackupDirUnreadable {
                path: dir.to_path_buf(),
                reason: "listing failed".to_string(),
            });
        }
        let suffix = pattern.trim_start_matches('*');
        Ok(self
            .files
            .read()
            .await
            .iter()
            .filter(|(path, _)| path.starts_with(dir))
            .filter(|(path, _)| path.to_string_lossy().ends_with(suffix))
            .map(|(path, age)| BackupFile::new(path.clone(), *age))
            .collect())
    }

    async fn remove_backup(&self, path: &Path) -> Result<RemoveOutcome, DomainError> {
        if self.locked.read().await.contains(path) {
            return Err(DomainError::IoError("permission denied".to_string()));
        }
        if self.vanished.read().await.contains(path) {
            self.files.write().await.remove(path);
            return Ok(RemoveOutcome::Missing);
        }
        match self.files.write().await.remove(path) {
            Some(_) => {
                self.removal_order.write().await.push(path.to_path_buf());
                Ok(RemoveOutcome::Removed)
            }
            None => Ok(RemoveOutcome::Missing),
        }
    }
}

pub struct MockDumpRunner {
    result: Result<(), DumpError>,
    commands: Arc<RwLock<Vec<DumpCommand>>>,
    call_count: Arc<AtomicU64>,
}

impl MockDumpRunner {
    pub fn succeeding() -> Self {
        Self::with_result(Ok(()))
    }

    pub fn failing(error: DumpError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<(), DumpError>) -> Self {
        Self {
            result,
            commands: Arc::new(RwLock::new(Vec::new())),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn last_command(&self) -> Option<DumpCommand> {
        self.commands.read().await.last().cloned()
    }
}

#[async_trait]
impl DumpRunner for MockDumpRunner {
    async fn run(&self, command: &DumpCommand) -> Result<DumpOutput, DumpError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.commands.write().await.push(command.clone());
        self.result.clone().map(|_| DumpOutput {
            output_file: command.output_file.clone(),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

/// Captures every reporter hook as a short event string.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl BackupReporter for RecordingReporter {
    fn backup_started(&self, database: &str) {
        self.record(format!("started:{}", database));
    }

    fn backup_completed(&self, database: &str, _output: &DumpOutput) {
        self.record(format!("completed:{}", database));
    }

    fn backup_failed(&self, database: &str, _error: &DumpError) {
        self.record(format!("failed:{}", database));
    }

    fn retention_completed(&self, database: &str, report: &RetentionReport) {
        self.record(format!("retention:{}:{}", database, report.deleted_count()));
    }

    fn retention_failed(&self, database: &str, _error: &DomainError) {
        self.record(format!("retention_failed:{}", database));
    }

    fn delete_failed(&self, path: &Path, _error: &DomainError) {
        self.record(format!("delete_failed:{}", path.display()));
    }
}
