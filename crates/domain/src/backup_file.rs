use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// A backup artifact found on disk. Age is fixed for the duration of a
/// retention run and measured in whole calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    pub path: PathBuf,
    pub age_days: u32,
}

impl BackupFile {
    pub fn new(path: impl Into<PathBuf>, age_days: u32) -> Self {
        Self {
            path: path.into(),
            age_days,
        }
    }

    pub fn from_modified(path: impl Into<PathBuf>, modified: NaiveDate, today: NaiveDate) -> Self {
        Self::new(path, age_in_days(today, modified))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Whole days between `modified` and `today`, ignoring time of day.
/// Modification dates in the future count as today.
pub fn age_in_days(today: NaiveDate, modified: NaiveDate) -> u32 {
    let days = today.signed_duration_since(modified).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}
