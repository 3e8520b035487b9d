//! Command implementations for the userbase CLI

pub mod init;
pub mod serve;

use clap::Args;
use userbase_server::DatabaseConfig;

pub use init::run_init;
pub use serve::run_serve;

/// Database connection overrides, applied on top of the config file
#[derive(Args, Debug, Default, Clone)]
pub struct DatabaseArgs {
    /// Database host
    #[arg(long = "db-host", env = "USERBASE_DB_HOST")]
    pub host: Option<String>,

    /// Database port
    #[arg(long = "db-port", env = "USERBASE_DB_PORT")]
    pub port: Option<u16>,

    /// Database name
    #[arg(long = "db-name", env = "USERBASE_DB_NAME")]
    pub database: Option<String>,

    /// Database user
    #[arg(long = "db-user", env = "USERBASE_DB_USER")]
    pub username: Option<String>,

    /// Database password
    #[arg(long = "db-password", env = "USERBASE_DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl DatabaseArgs {
    /// Overwrite every field that was given on the command line or in the environment.
    pub fn apply(self, config: &mut DatabaseConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(database) = self.database {
            config.database = database;
        }
        if let Some(username) = self.username {
            config.username = username;
        }
        if let Some(password) = self.password {
            config.password = password;
        }
    }
}
