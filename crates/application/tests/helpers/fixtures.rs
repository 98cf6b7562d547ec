#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::BTreeSet;

pub const BACKUP_DIR: &str = "/var/backups/pg";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

/// Distinct ages built from ordered picks of three of `{0,0,1,2,3,1}`
/// used as day, week and month offsets.
pub fn fixture_ages() -> Vec<u32> {
    const OFFSETS: [u32; 6] = [0, 0, 1, 2, 3, 1];
    let mut ages = BTreeSet::new();
    for (i, days) in OFFSETS.iter().enumerate() {
        for (j, weeks) in OFFSETS.iter().enumerate() {
            for (k, months) in OFFSETS.iter().enumerate() {
                if i != j && j != k && i != k {
                    ages.insert(days + weeks * 7 + months * 30);
                }
            }
        }
    }
    ages.into_iter().collect()
}
