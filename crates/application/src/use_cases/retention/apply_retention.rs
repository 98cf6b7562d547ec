use crate::ports::{BackupReporter, BackupStore, NoopReporter, RemoveOutcome};
use chrono::{Local, NaiveDate};
use ferrous_backup_domain::{classify, DomainError, RetentionPolicy, RetentionReport, Verdict};
use std::sync::Arc;
use tracing::debug;

/// Use case: enforce tiered retention over one backup directory
pub struct ApplyRetentionUseCase {
    store: Arc<dyn BackupStore>,
    reporter: Arc<dyn BackupReporter>,
}

impl ApplyRetentionUseCase {
    pub fn new(store: Arc<dyn BackupStore>) -> Self {
        Self {
            store,
            reporter: Arc::new(NoopReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn BackupReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub async fn execute(&self, policy: &RetentionPolicy) -> Result<RetentionReport, DomainError> {
        self.execute_on(policy, Local::now().date_naive()).await
    }

    /// Classify and delete relative to a fixed `today`. Only a failure to
    /// scan the directory is returned; per-file delete failures are
    /// recorded in the report and the pass continues.
    pub async fn execute_on(
        &self,
        policy: &RetentionPolicy,
        today: NaiveDate,
    ) -> Result<RetentionReport, DomainError> {
        let files = self
            .store
            .list_backups(&policy.backup_dir, &policy.name_pattern, today)
            .await?;

        debug!(
            dir = %policy.backup_dir.display(),
            found = files.len(),
            daily = policy.daily,
            weekly = policy.weekly,
            monthly = policy.monthly,
            "Classifying backups"
        );

        let classification = classify(policy, files);
        let mut report = RetentionReport::new(classification.len());

        for (file, verdict) in classification.into_decisions() {
            if let Verdict::Keep(tier) = verdict {
                debug!(path = %file.path.display(), age_days = file.age_days, ?tier, "Keeping backup");
                report.kept.push(file.path);
                continue;
            }

            match self.store.remove_backup(&file.path).await {
                Ok(RemoveOutcome::Removed) => {
                    debug!(path = %file.path.display(), age_days = file.age_days, "Backup removed");
                    report.deleted.push(file.path);
                }
                Ok(RemoveOutcome::Missing) => {
                    debug!(path = %file.path.display(), "Backup already gone");
                }
                Err(e) => {
                    debug!(path = %file.path.display(), error = %e, "Delete failed");
                    self.reporter.delete_failed(&file.path, &e);
                    report.failed.push(file.path);
                }
            }
        }

        debug!(
            scanned = report.scanned,
            kept = report.kept.len(),
            deleted = report.deleted.len(),
            failed = report.failed.len(),
            "Backup retention applied"
        );
        Ok(report)
    }
}
