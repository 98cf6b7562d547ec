use ferrous_backup_application::ports::BackupReporter;
use ferrous_backup_application::use_cases::{
    ApplyRetentionUseCase, DumpDatabaseUseCase, RunBackupUseCase,
};
use ferrous_backup_domain::Config;
use ferrous_backup_infrastructure::dump::ProcessDumpRunner;
use ferrous_backup_infrastructure::reporting::TracingReporter;
use ferrous_backup_infrastructure::storage::FsBackupStore;
use std::sync::Arc;

pub struct BackupServices {
    pub run_backup: Arc<RunBackupUseCase>,
}

impl BackupServices {
    pub fn new(config: &Config) -> Self {
        let settings = config.dump_settings();
        let reporter: Arc<dyn BackupReporter> = Arc::new(TracingReporter::new());

        let runner = Arc::new(ProcessDumpRunner::new(settings.timeout));
        let dump = Arc::new(
            DumpDatabaseUseCase::new(runner, settings).with_reporter(reporter.clone()),
        );
        let retention = Arc::new(
            ApplyRetentionUseCase::new(Arc::new(FsBackupStore::new()))
                .with_reporter(reporter.clone()),
        );

        Self {
            run_backup: Arc::new(
                RunBackupUseCase::new(dump, retention, config.retention_policy())
                    .with_reporter(reporter),
            ),
        }
    }
}
