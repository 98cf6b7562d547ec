use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Backup directory {path} is not readable: {reason}")]
    BackupDirUnreadable { path: PathBuf, reason: String },

    #[error("Invalid backup name pattern '{pattern}': {reason}")]
    InvalidNamePattern { pattern: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

/// Failure of a single dump invocation. Each variant ends the run for that
/// database; retention is never applied after any of them.
#[derive(Error, Debug, Clone)]
pub enum DumpError {
    #[error("Dump executable {program} could not be started: {reason}")]
    Launch { program: PathBuf, reason: String },

    #[error("Dump {program} exceeded timeout of {}s and was killed", .timeout.as_secs())]
    Timeout { program: PathBuf, timeout: Duration },

    #[error("Dump exited with {}: {stderr}", exit_code_label(.code))]
    Exit { code: Option<i32>, stderr: String },

    #[error("Failed to collect dump output: {0}")]
    Io(String),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}
