//! Valkey-compatible cache client.
//!
//! The client is connected and health-checked at startup, but no read path
//! consults it yet; it exists so the deployment surface matches the rest of
//! the stack.

use redis::aio::ConnectionManager;

use super::error::InfraError;

#[derive(Clone)]
pub struct CacheClient {
    manager: ConnectionManager,
}

impl CacheClient {
    /// Open a multiplexed connection and verify it with a PING.
    pub async fn connect(url: &str) -> Result<Self, InfraError> {
        let client = redis::Client::open(url)
            .map_err(|err| InfraError::cache(format!("invalid cache url: {err}")))?;
        let manager = ConnectionManager::new(client)
            .await
            .map_err(|err| InfraError::cache(format!("failed to connect: {err}")))?;

        let cache = Self { manager };
        cache.health_check().await?;
        Ok(cache)
    }

    pub async fn health_check(&self) -> Result<(), InfraError> {
        let mut conn = self.manager.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|err| InfraError::cache(format!("ping failed: {err}")))?;
        Ok(())
    }
}
