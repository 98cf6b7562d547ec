#![allow(dead_code)]
use chrono::{Duration, NaiveDate};
use ferrous_backup_domain::{backup_file_name, BackupFile, DAYS_IN_MONTH, DAYS_IN_WEEK};
use std::collections::BTreeSet;

const OFFSETS: [u32; 6] = [0, 0, 1, 2, 3, 1];

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

/// Every distinct age reachable from ordered picks of three offsets used as
/// (days, weeks, months).
pub fn fixture_ages() -> Vec<u32> {
    let mut ages = BTreeSet::new();
    for i in 0..OFFSETS.len() {
        for j in 0..OFFSETS.len() {
            for k in 0..OFFSETS.len() {
                if i == j || j == k || i == k {
                    continue;
                }
                ages.insert(
                    OFFSETS[i] + OFFSETS[j] * DAYS_IN_WEEK + OFFSETS[k] * DAYS_IN_MONTH,
                );
            }
        }
    }
    ages.into_iter().collect()
}

pub fn backup_aged(age_days: u32) -> BackupFile {
    let date = today() - Duration::days(i64::from(age_days));
    BackupFile::new(
        format!("/backups/{}", backup_file_name("test_db_name", date)),
        age_days,
    )
}

pub fn backups_aged(ages: &[u32]) -> Vec<BackupFile> {
    ages.iter().copied().map(backup_aged).collect()
}

pub fn fixture_backups() -> Vec<BackupFile> {
    backups_aged(&fixture_ages())
}
