mod backup_reporter;
mod backup_store;
mod dump_runner;

pub use backup_reporter::{BackupReporter, NoopReporter};
pub use backup_store::{BackupStore, RemoveOutcome};
pub use dump_runner::DumpRunner;
