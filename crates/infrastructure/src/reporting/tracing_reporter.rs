use ferrous_backup_application::ports::BackupReporter;
use ferrous_backup_domain::{DomainError, DumpError, DumpOutput, RetentionReport};
use std::path::Path;
use tracing::{error, info, warn};

/// Reporter that writes run diagnostics to the `tracing` subscriber.
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BackupReporter for TracingReporter {
    fn backup_started(&self, database: &str) {
        info!(database, "Starting {} backup sequence", database);
    }

    fn backup_completed(&self, database: &str, output: &DumpOutput) {
        info!(
            database,
            output = %output.output_file.display(),
            "{} backup sequence complete",
            database
        );
    }

    fn backup_failed(&self, database: &str, error: &DumpError) {
        match error {
            DumpError::Exit { code, stderr } => warn!(
                database,
                code = ?code,
                "There was an error during {} backup. Dump response is:\n{}",
                database,
                stderr
            ),
            other => error!(
                database,
                error = %other,
                "There was an error during {} backup",
                database
            ),
        }
    }

    fn retention_completed(&self, database: &str, report: &RetentionReport) {
        let mut lines = report.summary_lines().into_iter();
        if let Some(header) = lines.next() {
            info!(
                database,
                deleted = report.deleted_count(),
                kept = report.kept.len(),
                "{}",
                header
            );
        }
        for path in lines {
            info!(database, path = %path, "Removed backup");
        }
    }

    fn retention_failed(&self, database: &str, error: &DomainError) {
        error!(database, error = %error, "Retention pass failed");
    }

    fn delete_failed(&self, path: &Path, error: &DomainError) {
        error!(path = %path.display(), error = %error, "Could not delete backup file");
    }
}
