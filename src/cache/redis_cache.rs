//! Backend Redis.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::PlutoResult;

use super::ProjectCache;

/// Cache sobre um Redis compartilhado.
///
/// A conexão multiplexada é clonada a cada operação. Nenhuma operação é
/// repetida em caso de falha.
#[derive(Clone)]
pub struct RedisCache {
    conn: MultiplexedConnection,
}

impl RedisCache {
    /// Conecta e valida com `PING`.
    ///
    /// Falhas aqui impedem o serviço de subir.
    pub async fn connect(url: &str) -> PlutoResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        let cache = Self { conn };
        cache.ping().await?;

        tracing::debug!(url = %url, "Connected to Redis");
        Ok(cache)
    }
}

#[async_trait]
impl ProjectCache for RedisCache {
    fn backend(&self) -> &str {
        "redis"
    }

    async fn get(&self, key: &str) -> PlutoResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> PlutoResult<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn ping(&self) -> PlutoResult<()> {
        let mut conn = self.conn.clone();
        let _pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
