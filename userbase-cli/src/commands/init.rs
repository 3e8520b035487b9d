//! Reseed command
//!
//! Runs the same schema-create, clear, and seed sequence the server
//! runs at startup, then exits.

use anyhow::{Context, Result};
use clap::Parser;
use userbase_server::db::create_pool;
use userbase_server::{AppConfig, PgUserRepo, UserStore};

use super::DatabaseArgs;

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_init(args: InitArgs, mut config: AppConfig) -> Result<()> {
    args.database.apply(&mut config.database);
    tracing::info!(database = ?config.database, "Initializing users table");

    let pool = create_pool(&config.database)
        .await
        .context("Failed to create database pool")?;

    PgUserRepo::new(pool)
        .init()
        .await
        .context("Failed to initialize users table")?;

    Ok(())
}
