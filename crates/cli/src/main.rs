use clap::Parser;
use ferrous_backup_domain::CliOverrides;
use std::process::ExitCode;
use tracing::{debug, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-backup")]
#[command(version)]
#[command(about = "Ferrous Backup - database dumps with tiered daily/weekly/monthly retention")]
struct Cli {
    /// Database to back up (defaults to the configured name)
    database: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Backup directory
    #[arg(long, value_name = "DIR")]
    backup_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database: cli.database.clone(),
        backup_dir: cli.backup_dir.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Backup v{}", env!("CARGO_PKG_VERSION"));

    let services = di::BackupServices::new(&config);
    let database = config.backup.database.as_str();

    let outcome = services.run_backup.execute(database).await;

    // The reporter has already logged every event of the run.
    debug!(database, success = outcome.is_success(), "Backup run finished");

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
