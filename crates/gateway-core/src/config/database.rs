//! Database connection configuration.

use serde::{Deserialize, Serialize};

/// PostgreSQL connection and pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    #[serde(default = "default_db_port")]
    pub port: u16,
    /// Database user.
    pub username: String,
    /// Database password.
    pub password: String,
    /// Database name.
    pub name: String,
    /// SSL mode (`disable`, `require`, ...).
    #[serde(default = "default_sslmode")]
    pub sslmode: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection acquire timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// How many times to retry the initial dial before giving up.
    #[serde(default = "default_connect_retries")]
    pub connect_retries: u32,
    /// Fixed delay between dial attempts in seconds (0 = incremental backoff).
    #[serde(default)]
    pub retry_interval_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: default_db_port(),
            username: "gateway".to_string(),
            password: String::new(),
            name: "gateway".to_string(),
            sslmode: default_sslmode(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
            connect_retries: default_connect_retries(),
            retry_interval_seconds: 0,
        }
    }
}

impl DatabaseConfig {
    /// Build the connection URL from the discrete fields.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            self.username, self.password, self.host, self.port, self.name, self.sslmode
        )
    }
}

fn default_db_port() -> u16 {
    5432
}

fn default_sslmode() -> String {
    "disable".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

fn default_connect_retries() -> u32 {
    3
}
