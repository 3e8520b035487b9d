//! userbase-server: HTTP service for the users resource
//!
//! Maps four REST endpoints onto four parameterized SQL statements
//! against a PostgreSQL `users` table.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{AppConfig, ConfigError, DatabaseConfig};
pub use db::{MemoryUserStore, PgUserRepo, StoreError, UserStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use models::User;
