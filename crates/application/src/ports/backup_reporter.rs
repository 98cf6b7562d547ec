use ferrous_backup_domain::{DomainError, DumpError, DumpOutput, RetentionReport};
use std::path::Path;

/// Sink for run diagnostics. Every hook defaults to doing nothing.
pub trait BackupReporter: Send + Sync {
    fn backup_started(&self, _database: &str) {}

    fn backup_completed(&self, _database: &str, _output: &DumpOutput) {}

    fn backup_failed(&self, _database: &str, _error: &DumpError) {}

    fn retention_completed(&self, _database: &str, _report: &RetentionReport) {}

    fn retention_failed(&self, _database: &str, _error: &DomainError) {}

    fn delete_failed(&self, _path: &Path, _error: &DomainError) {}
}

pub struct NoopReporter;

impl BackupReporter for NoopReporter {}
