use crate::ports::{BackupReporter, DumpRunner, NoopReporter};
use chrono::{Local, NaiveDate};
use ferrous_backup_domain::{DumpError, DumpOutput, DumpSettings};
use std::sync::Arc;
use tracing::debug;

/// Use case: run the external dump tool once for a database
pub struct DumpDatabaseUseCase {
    runner: Arc<dyn DumpRunner>,
    settings: DumpSettings,
    reporter: Arc<dyn BackupReporter>,
}

impl DumpDatabaseUseCase {
    pub fn new(runner: Arc<dyn DumpRunner>, settings: DumpSettings) -> Self {
        Self {
            runner,
            settings,
            reporter: Arc::new(NoopReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn BackupReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub async fn execute(&self, database: &str) -> Result<DumpOutput, DumpError> {
        self.execute_on(database, Local::now().date_naive()).await
    }

    pub async fn execute_on(
        &self,
        database: &str,
        date: NaiveDate,
    ) -> Result<DumpOutput, DumpError> {
        let command = self.settings.command_for(database, date);

        debug!(database, output = %command.output_file.display(), "Running dump");
        self.reporter.backup_started(database);

        match self.runner.run(&command).await {
            Ok(output) => {
                debug!(database, output = %output.output_file.display(), "Dump finished");
                self.reporter.backup_completed(database, &output);
                Ok(output)
            }
            Err(e) => {
                debug!(database, error = %e, "Dump failed");
                self.reporter.backup_failed(database, &e);
                Err(e)
            }
        }
    }
}
