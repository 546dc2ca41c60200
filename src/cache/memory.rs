//! Backend em memória.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::PlutoResult;

use super::ProjectCache;

/// Mapa chave-valor local ao processo.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCache {
    /// Cria um cache vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria um cache com uma entrada pré-carregada.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl ProjectCache for MemoryCache {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> PlutoResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> PlutoResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
