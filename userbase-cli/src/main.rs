//! userbase - users resource HTTP service
//!
//! Subcommands:
//! - `serve`: seed the users table and run the HTTP API
//! - `init`: reseed the users table and exit

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use userbase_server::AppConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "userbase",
    author,
    version,
    about = "HTTP service exposing a users resource backed by PostgreSQL"
)]
struct Cli {
    /// Debug logging (when RUST_LOG is not set)
    #[arg(long, global = true)]
    debug: bool,

    /// TOML config file with [server] and [database] sections
    #[arg(long, short = 'c', global = true, env = "USERBASE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Recreate the seed rows in the users table, then exit
    Init(commands::init::InitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config).await?,
        Commands::Init(args) => commands::run_init(args, config).await?,
    }

    Ok(())
}
