//! Serviço de leitura cache-ou-varredura.

use std::sync::Arc;

use crate::cache::ProjectCache;
use crate::scanner::ProjectSource;
use crate::types::project::ProjectCollection;
use crate::{PlutoError, PlutoResult};

/// Leitura da lista de projetos.
///
/// Recebe o cache e a fonte explicitamente; não há estado global. A chave
/// nunca é expirada nem removida aqui.
#[derive(Clone)]
pub struct ProjectLookup {
    cache: Arc<dyn ProjectCache>,
    source: Arc<dyn ProjectSource>,
    key: String,
}

impl ProjectLookup {
    /// Cria o serviço.
    pub fn new(
        cache: Arc<dyn ProjectCache>,
        source: Arc<dyn ProjectSource>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            source,
            key: key.into(),
        }
    }

    /// Chave usada no cache.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Retorna a lista atual, do cache ou de uma varredura.
    pub async fn projects(&self) -> PlutoResult<ProjectCollection> {
        match self.cache.get(&self.key).await? {
            Some(raw) => {
                let projects = ProjectCollection::from_json(&raw)?;
                tracing::debug!(key = %self.key, projects = projects.len(), "Cache hit");
                Ok(projects)
            }
            None => {
                tracing::info!(key = %self.key, "Cache miss, scanning projects");
                self.rebuild().await
            }
        }
    }

    /// Varre e grava no cache; falha na gravação é apenas registrada.
    ///
    /// Raiz ausente resulta em coleção vazia que não é gravada, para que uma
    /// montagem indisponível não fixe uma página vazia na chave.
    pub async fn rebuild(&self) -> PlutoResult<ProjectCollection> {
        let Some(projects) = self.scan().await? else {
            tracing::warn!(key = %self.key, "Projects root missing, not caching");
            return Ok(ProjectCollection::empty());
        };

        match projects.to_json() {
            Ok(raw) => {
                if let Err(e) = self.cache.set(&self.key, &raw).await {
                    tracing::warn!(key = %self.key, error = %e, "Failed to store projects");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize projects"),
        }

        Ok(projects)
    }

    /// Varre e sobrescreve a chave, propagando falhas de gravação.
    ///
    /// Com a raiz ausente a chave é mantida como está.
    pub async fn refresh(&self) -> PlutoResult<ProjectCollection> {
        let Some(projects) = self.scan().await? else {
            tracing::warn!(key = %self.key, "Projects root missing, key left untouched");
            return Ok(ProjectCollection::empty());
        };
        self.cache.set(&self.key, &projects.to_json()?).await?;

        tracing::info!(key = %self.key, projects = projects.len(), "Projects refreshed");
        Ok(projects)
    }

    async fn scan(&self) -> PlutoResult<Option<ProjectCollection>> {
        let source = Arc::clone(&self.source);
        tokio::task::spawn_blocking(move || source.scan())
            .await
            .map_err(|e| PlutoError::other(format!("Scan task failed: {}", e)))?
    }
}
