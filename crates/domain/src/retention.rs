use crate::backup_file::BackupFile;
use std::path::{Path, PathBuf};

pub const DAYS_IN_WEEK: u32 = 7;
pub const DAYS_IN_MONTH: u32 = 30;

/// Tiered retention quotas for one backup directory.
///
/// `daily` newest files are always kept; `weekly` and `monthly` limit how far
/// back (in week/month buckets) one survivor per bucket is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPolicy {
    pub backup_dir: PathBuf,
    pub name_pattern: String,
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
}

impl RetentionPolicy {
    pub fn new(backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_quotas(mut self, daily: u32, weekly: u32, monthly: u32) -> Self {
        self.daily = daily;
        self.weekly = weekly;
        self.monthly = monthly;
        self
    }

    pub fn with_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = pattern.into();
        self
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            backup_dir: PathBuf::from("."),
            name_pattern: "*.backup".to_string(),
            daily: 3,
            weekly: 3,
            monthly: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Keep(Tier),
    Delete,
}

impl Verdict {
    pub fn is_keep(self) -> bool {
        matches!(self, Verdict::Keep(_))
    }
}

/// Counters consumed while walking one set of files. Never outlives a
/// single `classify` call.
#[derive(Debug)]
struct RemainingQuota {
    daily: u32,
    weekly: u32,
    monthly: u32,
}

impl RemainingQuota {
    fn from_policy(policy: &RetentionPolicy) -> Self {
        let mut daily = policy.daily;
        // The weekly/monthly walk relies on two daily slots: the newest file
        // and one pending anchor.
        if policy.weekly > 0 || policy.monthly > 0 {
            daily = daily.max(2);
        }
        Self {
            daily,
            weekly: policy.weekly,
            monthly: policy.monthly,
        }
    }

    fn anchor_pending(&self) -> bool {
        self.daily == 1
    }

    /// Decide one file during the oldest-to-newest walk. Age bands are
    /// exclusive: a file that misses the quota of its own band is deleted.
    fn judge(&mut self, age_days: u32) -> Verdict {
        if age_days >= DAYS_IN_MONTH {
            if self.monthly > 0 {
                let month = age_days / DAYS_IN_MONTH;
                if month <= self.monthly {
                    self.monthly = month - 1;
                    return Verdict::Keep(Tier::Monthly);
                }
            }
        } else if age_days >= DAYS_IN_WEEK {
            if self.weekly > 0 {
                let week = age_days / DAYS_IN_WEEK;
                if week <= self.weekly {
                    self.weekly = week - 1;
                    return Verdict::Keep(Tier::Weekly);
                }
            }
        } else if self.anchor_pending() {
            self.daily = 0;
            return Verdict::Keep(Tier::Daily);
        }
        Verdict::Delete
    }
}

/// Outcome of one classification pass.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    decisions: Vec<(BackupFile, Verdict)>,
}

impl Classification {
    /// Decisions in walk order (oldest first), followed by the reserved
    /// newest files from oldest to newest.
    pub fn decisions(&self) -> &[(BackupFile, Verdict)] {
        &self.decisions
    }

    pub fn into_decisions(self) -> Vec<(BackupFile, Verdict)> {
        self.decisions
    }

    pub fn to_delete(&self) -> impl Iterator<Item = &BackupFile> {
        self.decisions
            .iter()
            .filter(|(_, verdict)| *verdict == Verdict::Delete)
            .map(|(file, _)| file)
    }

    pub fn kept(&self) -> impl Iterator<Item = &BackupFile> {
        self.decisions
            .iter()
            .filter(|(_, verdict)| verdict.is_keep())
            .map(|(file, _)| file)
    }

    pub fn verdict_of(&self, path: &Path) -> Option<Verdict> {
        self.decisions
            .iter()
            .find(|(file, _)| file.path == path)
            .map(|(_, verdict)| *verdict)
    }

    pub fn count(&self, verdict: Verdict) -> usize {
        self.decisions.iter().filter(|(_, v)| *v == verdict).count()
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

/// Split `files` into kept and deleted sets according to `policy`.
///
/// The newest `daily - 1` files are reserved outright and one further slot is
/// left pending for the oldest file younger than a week. Remaining files are
/// walked oldest first; each month/week bucket keeps at most one file and the
/// tier quota narrows to `bucket - 1` after every keep. With only a daily
/// quota of 1 there is no pending slot.
pub fn classify(policy: &RetentionPolicy, files: Vec<BackupFile>) -> Classification {
    let mut remaining = RemainingQuota::from_policy(policy);

    let mut candidates = files;
    candidates.sort_by(|a, b| {
        b.age_days
            .cmp(&a.age_days)
            .then_with(|| b.path.cmp(&a.path))
    });

    let mut reserved = Vec::new();
    while remaining.daily > 0 {
        let Some(newest) = candidates.pop() else {
            break;
        };
        reserved.push(newest);
        remaining.daily -= 1;
        if remaining.anchor_pending() {
            break;
        }
    }

    let mut decisions = Vec::with_capacity(candidates.len() + reserved.len());
    for file in candidates {
        let verdict = remaining.judge(file.age_days);
        decisions.push((file, verdict));
    }
    decisions.extend(
        reserved
            .into_iter()
            .rev()
            .map(|file| (file, Verdict::Keep(Tier::Daily))),
    );

    Classification { decisions }
}

/// What a retention run actually did on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionReport {
    pub scanned: usize,
    pub kept: Vec<PathBuf>,
    /// Successfully removed files, in deletion order.
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl RetentionReport {
    pub fn new(scanned: usize) -> Self {
        Self {
            scanned,
            ..Self::default()
        }
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn sorted_deleted(&self) -> Vec<PathBuf> {
        let mut sorted = self.deleted.clone();
        sorted.sort();
        sorted
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.deleted.len() + 1);
        lines.push(format!("Removed {} files:", self.deleted.len()));
        lines.extend(
            self.sorted_deleted()
                .iter()
                .map(|path| path.display().to_string()),
        );
        lines
    }
}
