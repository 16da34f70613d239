use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};

use crate::config::Config;
use crate::store::NoteStore;

/// Shareable Redis handle for use across async handlers
///
/// Wraps a single multiplexed `ConnectionManager`. Cloning is cheap and
/// every clone talks over the same connection; there is no pool.
#[derive(Clone)]
pub struct RedisNoteStore {
    conn: ConnectionManager,
    key: String,
}

impl RedisNoteStore {
    /// Connect to Redis and verify the connection with a PING
    ///
    /// Called once at startup. Any failure here is meant to stop the
    /// process before it starts serving requests.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid, the connection cannot be
    /// established, or the server does not answer the PING
    pub async fn connect(config: &Config) -> Result<Self> {
        let url = config.redis_url();
        tracing::info!("Connecting to Redis at: {}", url);

        let client = redis::Client::open(url.as_str())
            .with_context(|| format!("Invalid Redis URL: {}", url))?;

        let manager_config = ConnectionManagerConfig::new().set_number_of_retries(1);
        let conn = client
            .get_connection_manager_with_config(manager_config)
            .await
            .with_context(|| format!("Failed to connect to Redis at {}", config.redis_host))?;

        let store = Self {
            conn,
            key: config.notes_key.clone(),
        };

        store
            .ping()
            .await
            .with_context(|| format!("Redis at {} did not answer PING", config.redis_host))?;

        tracing::info!("Successfully connected to Redis at {}", config.redis_host);
        Ok(store)
    }
}

#[async_trait]
impl NoteStore for RedisNoteStore {
    async fn append(&self, note: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let len: i64 = conn
            .rpush(&self.key, note)
            .await
            .context("Failed to append note to Redis")?;

        tracing::debug!("Appended note to '{}' (length now {})", self.key, len);
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let notes: Vec<String> = conn
            .lrange(&self.key, 0, -1)
            .await
            .context("Failed to read notes from Redis")?;

        tracing::debug!("Read {} notes from '{}'", notes.len(), self.key);
        Ok(notes)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("Failed to execute PING")?;

        if pong == "PONG" {
            tracing::debug!("PING succeeded");
            Ok(())
        } else {
            Err(anyhow::anyhow!("Unexpected PING reply: {}", pong))
        }
    }
}
