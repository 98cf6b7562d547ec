mod dump_database;
mod run_backup;

pub use dump_database::DumpDatabaseUseCase;
pub use run_backup::{BackupOutcome, RunBackupUseCase};
