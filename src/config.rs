use std::env;
use anyhow::{Context, Result, bail};

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_db: i64,
    pub notes_key: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// `from_env` goes through here with the process environment; tests pass
    /// a map so they don't race on global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redis_host = lookup("REDIS_HOST")
            .unwrap_or_else(|| "localhost".to_string());

        let redis_port = lookup("REDIS_PORT")
            .unwrap_or_else(|| "6379".to_string())
            .parse::<u16>()
            .context("REDIS_PORT must be a valid port number (0-65535)")?;

        let redis_db = lookup("REDIS_DB")
            .unwrap_or_else(|| "0".to_string())
            .parse::<i64>()
            .context("REDIS_DB must be an integer database index")?;

        let notes_key = lookup("NOTES_KEY")
            .unwrap_or_else(|| "notes".to_string());
        if notes_key.is_empty() {
            bail!("NOTES_KEY must not be empty");
        }

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "5001".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            redis_host,
            redis_port,
            redis_db,
            notes_key,
            service_port,
            service_host,
        })
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/{}", self.redis_host, self.redis_port, self.redis_db)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis: {}:{} (db {})", self.redis_host, self.redis_port, self.redis_db);
        tracing::info!("  Notes key: {}", self.notes_key);
        tracing::info!("  Service listening on: {}", self.listen_addr());
    }
}
