use async_trait::async_trait;
use ferrous_backup_application::ports::DumpRunner;
use ferrous_backup_domain::{DumpCommand, DumpError, DumpOutput};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs the dump tool as a child process under a wall-clock watchdog.
pub struct ProcessDumpRunner {
    timeout: Duration,
}

impl ProcessDumpRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl DumpRunner for ProcessDumpRunner {
    async fn run(&self, command: &DumpCommand) -> Result<DumpOutput, DumpError> {
        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .envs(command.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the pending wait on timeout kills the child.
            .kill_on_drop(true);

        debug!(program = %command.program.display(), ?command, "Spawning dump process");

        let child = process.spawn().map_err(|e| DumpError::Launch {
            program: command.program.clone(),
            reason: e.to_string(),
        })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| DumpError::Io(e.to_string()))?,
            Err(_) => {
                warn!(
                    program = %command.program.display(),
                    timeout_secs = self.timeout.as_secs(),
                    "Dump timed out, child killed"
                );
                return Err(DumpError::Timeout {
                    program: command.program.clone(),
                    timeout: self.timeout,
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(DumpError::Exit {
                code: output.status.code(),
                stderr: stderr.trim_end().to_string(),
            });
        }

        Ok(DumpOutput {
            output_file: command.output_file.clone(),
            stdout,
            stderr,
        })
    }
}
