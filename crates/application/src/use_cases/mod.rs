pub mod backup;
pub mod retention;

// Re-export use cases
pub use backup::{BackupOutcome, DumpDatabaseUseCase, RunBackupUseCase};
pub use retention::ApplyRetentionUseCase;
