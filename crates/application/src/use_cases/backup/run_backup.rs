use super::DumpDatabaseUseCase;
use crate::ports::{BackupReporter, NoopReporter};
use crate::use_cases::ApplyRetentionUseCase;
use chrono::{Local, NaiveDate};
use ferrous_backup_domain::{DomainError, DumpError, DumpOutput, RetentionPolicy, RetentionReport};
use std::sync::Arc;
use tracing::debug;

/// Result of one backup run. Failures stay local to the run.
#[derive(Debug)]
pub enum BackupOutcome {
    Completed {
        output: DumpOutput,
        retention: RetentionReport,
    },
    RetentionFailed {
        output: DumpOutput,
        error: DomainError,
    },
    DumpFailed(DumpError),
}

impl BackupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BackupOutcome::Completed { .. })
    }

    pub fn retention(&self) -> Option<&RetentionReport> {
        match self {
            BackupOutcome::Completed { retention, .. } => Some(retention),
            _ => None,
        }
    }
}

/// Use case: dump a database, then prune its backup directory
pub struct RunBackupUseCase {
    dump: Arc<DumpDatabaseUseCase>,
    retention: Arc<ApplyRetentionUseCase>,
    policy: RetentionPolicy,
    reporter: Arc<dyn BackupReporter>,
}

impl RunBackupUseCase {
    pub fn new(
        dump: Arc<DumpDatabaseUseCase>,
        retention: Arc<ApplyRetentionUseCase>,
        policy: RetentionPolicy,
    ) -> Self {
        Self {
            dump,
            retention,
            policy,
            reporter: Arc::new(NoopReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn BackupReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub async fn execute(&self, database: &str) -> BackupOutcome {
        self.execute_on(database, Local::now().date_naive()).await
    }

    /// Retention only runs once the dump has exited successfully.
    pub async fn execute_on(&self, database: &str, today: NaiveDate) -> BackupOutcome {
        let output = match self.dump.execute_on(database, today).await {
            Ok(output) => output,
            Err(e) => {
                debug!(database, "Skipping retention after failed backup");
                return BackupOutcome::DumpFailed(e);
            }
        };

        match self.retention.execute_on(&self.policy, today).await {
            Ok(report) => {
                self.reporter.retention_completed(database, &report);
                BackupOutcome::Completed {
                    output,
                    retention: report,
                }
            }
            Err(e) => {
                self.reporter.retention_failed(database, &e);
                BackupOutcome::RetentionFailed { output, error: e }
            }
        }
    }
}
