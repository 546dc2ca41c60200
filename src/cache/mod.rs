//! Cache da lista de projetos.
//!
//! A lista fica serializada em uma única chave, sem expiração. O serviço
//! nunca invalida a chave: um processo externo a sobrescreve quando os
//! diretórios mudam.
//!
//! Implementações:
//! - [`RedisCache`] - Redis compartilhado (produção)
//! - [`MemoryCache`] - mapa em memória (execução local e testes)

mod memory;
mod redis_cache;
mod store;

use std::sync::Arc;

pub use self::memory::MemoryCache;
pub use self::redis_cache::RedisCache;
pub use self::store::ProjectCache;

use crate::types::config::{CacheBackend, CacheConfig};
use crate::PlutoResult;

/// Cria o backend configurado e valida a conexão.
pub async fn build_cache(config: &CacheConfig) -> PlutoResult<Arc<dyn ProjectCache>> {
    let cache: Arc<dyn ProjectCache> = match config.backend {
        CacheBackend::Redis => Arc::new(RedisCache::connect(&config.url).await?),
        CacheBackend::Memory => Arc::new(MemoryCache::new()),
    };

    tracing::info!(backend = cache.backend(), "Cache ready");
    Ok(cache)
}
