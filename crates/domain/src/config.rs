pub mod backup;
pub mod dump;
pub mod errors;
pub mod logging;
pub mod retention;
pub mod root;

pub use backup::BackupConfig;
pub use dump::DumpConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use retention::RetentionConfig;
pub use root::{CliOverrides, Config};
