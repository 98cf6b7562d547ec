use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize, Serialize)]
pub struct DumpConfig {
    /// Path to the dump executable; bare names are resolved through `PATH`.
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default = "default_username")]
    pub username: String,

    /// Passed to the child through the environment only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Wall-clock bound for one dump. Default: 10 hours.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            format: default_format(),
            username: default_username(),
            password: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for DumpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DumpConfig")
            .field("program", &self.program)
            .field("format", &self.format)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_program() -> String {
    "pg_dump".to_string()
}

fn default_format() -> String {
    "custom".to_string()
}

fn default_username() -> String {
    "postgres".to_string()
}

fn default_timeout_secs() -> u64 {
    10 * 60 * 60
}
