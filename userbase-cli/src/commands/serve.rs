//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use userbase_server::db::create_pool;
use userbase_server::{run_server, AppConfig, MemoryUserStore, PgUserRepo, UserStore};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8080)
    #[arg(long, short = 'b', env = "USERBASE_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Do not recreate the seed rows on startup
    #[arg(long)]
    pub skip_init: bool,

    /// Keep users in process memory instead of PostgreSQL
    #[arg(long)]
    pub memory: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut config: AppConfig) -> Result<()> {
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    if args.cors_permissive {
        config.server.cors_permissive = true;
    }
    args.database.apply(&mut config.database);

    let store: Arc<dyn UserStore> = if args.memory {
        tracing::warn!("Using in-memory store; data is lost on exit");
        Arc::new(MemoryUserStore::new())
    } else {
        tracing::info!(database = ?config.database, "Connecting to database");
        let pool = create_pool(&config.database)
            .await
            .context("Failed to create database pool")?;
        Arc::new(PgUserRepo::new(pool))
    };

    if args.skip_init {
        tracing::info!("Skipping users table initialization");
    } else {
        store
            .init()
            .await
            .context("Failed to initialize users table")?;
    }

    tracing::info!("Starting userbase server on {}", config.server.bind_addr);

    // Blocks until shutdown
    run_server(store, config.server)
        .await
        .context("Server error")?;

    Ok(())
}
