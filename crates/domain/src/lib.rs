//! Ferrous Backup Domain Layer
pub mod backup_file;
pub mod config;
pub mod dump;
pub mod errors;
pub mod retention;

pub use backup_file::{age_in_days, BackupFile};
pub use config::{CliOverrides, Config, ConfigError};
pub use dump::{backup_file_name, DumpCommand, DumpOutput, DumpSettings, PASSWORD_ENV};
pub use errors::{DomainError, DumpError};
pub use retention::{
    classify, Classification, RetentionPolicy, RetentionReport, Tier, Verdict, DAYS_IN_MONTH,
    DAYS_IN_WEEK,
};
