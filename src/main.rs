//! ReelVault catalog sweep binary.
//!
//! Runs the backfill half of the reconciliation engine for one user: every
//! movie of theirs that belongs to no folder is categorized into genre
//! folders. The web application triggers the same sweep on dashboard load;
//! this binary is the operational way to run it out of band.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

use reelvault_catalog::Reconciler;
use reelvault_core::config::AppConfig;
use reelvault_core::error::AppError;
use reelvault_database::DatabasePool;
use reelvault_database::repositories::{
    FolderRepository, MembershipRepository, MovieRepository, UserRepository,
};

/// Backfill genre folders for one user's movie catalog.
#[derive(Debug, Parser)]
#[command(name = "reelvault-sweep", version)]
struct Cli {
    /// ID of the user whose catalog should be swept.
    #[arg(long)]
    user: Uuid,

    /// Configuration environment (reads config/<env>.toml over defaults).
    #[arg(long, default_value = "development")]
    env: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&config, cli.user).await {
        tracing::error!("Sweep failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: &AppConfig, user_id: Uuid) -> Result<(), AppError> {
    tracing::info!("Starting ReelVault sweep v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;
    if !db.health_check().await? {
        return Err(AppError::database("Database health check failed"));
    }
    reelvault_database::migration::run_migrations(db.pool()).await?;

    let users = UserRepository::new(db.pool().clone());
    if !users.exists(user_id).await? {
        return Err(AppError::not_found(format!("User {user_id} not found")));
    }

    let movies = Arc::new(MovieRepository::new(db.pool().clone()));
    let folders = Arc::new(FolderRepository::new(db.pool().clone()));
    let memberships = Arc::new(MembershipRepository::new(db.pool().clone()));

    let reconciler = Reconciler::new(movies, folders, memberships);
    let outcome = reconciler.reconcile_all_unlinked(user_id).await?;

    tracing::info!(
        examined = outcome.movies_examined,
        failed = outcome.movies_failed,
        folders = outcome.folders_touched,
        memberships = outcome.memberships_created,
        "Sweep finished"
    );

    db.close().await;
    Ok(())
}
