//! Schema migration tool for the feedback service

mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use feedback_service::{infra::storage, Config, Migrator};
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "feedback-migrate", version, about = "Manage the feedback service schema")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Overrides `database.url` from the configuration
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending migrations
    Up {
        /// Number of migrations to apply (all when omitted)
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Roll back applied migrations
    Down {
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// Drop every table and apply all migrations again
    Fresh,
    /// Show applied and pending migrations
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }
    logging::init_logging(&config.logging.level)?;

    let db = storage::connect(&config.database).await?;
    tracing::info!(url = %config.database.redacted_url(), "Connected");

    match cli.command {
        Command::Up { steps } => {
            Migrator::up(&db, steps).await?;
            tracing::info!("Migrations applied");
        }
        Command::Down { steps } => {
            Migrator::down(&db, Some(steps)).await?;
            tracing::info!(steps, "Migrations rolled back");
        }
        Command::Fresh => {
            Migrator::fresh(&db).await?;
            tracing::info!("Schema recreated");
        }
        Command::Status => {
            Migrator::status(&db).await?;
        }
    }

    db.close().await?;
    Ok(())
}
