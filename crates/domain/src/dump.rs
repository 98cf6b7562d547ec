use chrono::NaiveDate;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable the dump tool reads its password from.
pub const PASSWORD_ENV: &str = "PGPASSWORD";

const BACKUP_EXTENSION: &str = "backup";

/// File name of the backup written for `database` on `date`,
/// e.g. `sales-2024-03-01.backup`.
pub fn backup_file_name(database: &str, date: NaiveDate) -> String {
    format!(
        "{}-{}.{}",
        database,
        date.format("%Y-%m-%d"),
        BACKUP_EXTENSION
    )
}

/// How to invoke the external dump tool.
#[derive(Clone)]
pub struct DumpSettings {
    pub program: PathBuf,
    pub format: String,
    pub username: String,
    pub password: Option<String>,
    pub backup_dir: PathBuf,
    pub timeout: Duration,
}

impl DumpSettings {
    pub fn backup_file(&self, database: &str, date: NaiveDate) -> PathBuf {
        self.backup_dir.join(backup_file_name(database, date))
    }

    /// Build the argument vector and environment for dumping `database`.
    /// The password travels only through the environment.
    pub fn command_for(&self, database: &str, date: NaiveDate) -> DumpCommand {
        let output_file = self.backup_file(database, date);

        let args: Vec<OsString> = vec![
            "-F".into(),
            self.format.clone().into(),
            "-U".into(),
            self.username.clone().into(),
            "-f".into(),
            output_file.clone().into_os_string(),
            database.into(),
        ];

        let envs = self
            .password
            .iter()
            .map(|password| (PASSWORD_ENV.to_string(), password.clone()))
            .collect();

        DumpCommand {
            program: self.program.clone(),
            args,
            envs,
            output_file,
        }
    }
}

impl Default for DumpSettings {
    fn default() -> Self {
        Self {
            program: PathBuf::from("pg_dump"),
            format: "custom".to_string(),
            username: "postgres".to_string(),
            password: None,
            backup_dir: PathBuf::from("."),
            timeout: Duration::from_secs(10 * 60 * 60),
        }
    }
}

impl fmt::Debug for DumpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DumpSettings")
            .field("program", &self.program)
            .field("format", &self.format)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("backup_dir", &self.backup_dir)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A fully resolved dump invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct DumpCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Extra variables layered over the inherited environment.
    pub envs: Vec<(String, String)>,
    pub output_file: PathBuf,
}

impl fmt::Debug for DumpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let env_keys: Vec<&str> = self.envs.iter().map(|(key, _)| key.as_str()).collect();
        f.debug_struct("DumpCommand")
            .field("program", &self.program)
            .field("args", &self.args)
            .field("env_keys", &env_keys)
            .field("output_file", &self.output_file)
            .finish()
    }
}

/// Captured result of a successful dump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpOutput {
    pub output_file: PathBuf,
    pub stdout: String,
    pub stderr: String,
}
