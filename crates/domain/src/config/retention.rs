use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetentionConfig {
    #[serde(default = "default_daily")]
    pub daily: u32,

    #[serde(default = "default_weekly")]
    pub weekly: u32,

    #[serde(default = "default_monthly")]
    pub monthly: u32,

    /// Glob matched against file names in the backup directory.
    #[serde(default = "default_name_pattern")]
    pub name_pattern: String,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            daily: default_daily(),
            weekly: default_weekly(),
            monthly: default_monthly(),
            name_pattern: default_name_pattern(),
        }
    }
}

fn default_daily() -> u32 {
    3
}

fn default_weekly() -> u32 {
    3
}

fn default_monthly() -> u32 {
    1
}

fn default_name_pattern() -> String {
    "*.backup".to_string()
}
