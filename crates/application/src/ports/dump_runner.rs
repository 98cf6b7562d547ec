use async_trait::async_trait;
use ferrous_backup_domain::{DumpCommand, DumpError, DumpOutput};

#[async_trait]
pub trait DumpRunner: Send + Sync {
    async fn run(&self, command: &DumpCommand) -> Result<DumpOutput, DumpError>;
}
