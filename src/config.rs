use log::warn;
use std::env;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://flowforge.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Config {
    /// Reads the service configuration from the environment. Call `dotenv()` first
    /// if values should also come from a `.env` file.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_or("SERVER_PORT", 8000),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 5),
            },
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}
