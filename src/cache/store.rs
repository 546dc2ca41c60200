//! Trait base para backends de cache.

use async_trait::async_trait;

use crate::PlutoResult;

/// Armazenamento chave-valor usado para a lista de projetos.
///
/// `get` distingue ausência da chave (`Ok(None)`) de falhas do backend
/// (`Err`). `set` grava sem expiração.
#[async_trait]
pub trait ProjectCache: Send + Sync {
    /// Nome do backend, para logs.
    fn backend(&self) -> &str;

    /// Lê o valor da chave.
    async fn get(&self, key: &str) -> PlutoResult<Option<String>>;

    /// Grava o valor da chave, sobrescrevendo o anterior.
    async fn set(&self, key: &str, value: &str) -> PlutoResult<()>;

    /// Verifica a conectividade com o backend.
    async fn ping(&self) -> PlutoResult<()> {
        Ok(())
    }
}
