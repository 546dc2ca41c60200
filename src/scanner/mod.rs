//! Descoberta de projetos e versões no disco.
//!
//! A estrutura tem dois níveis:
//!
//! ```text
//! <root>/project12/v1/
//! <root>/project12/v2/
//! <root>/project7/v1/
//! ```
//!
//! Apenas nomes de diretórios são lidos; o conteúdo dos arquivos nunca é aberto.

mod directory;

pub use directory::DirectoryScanner;

use crate::types::project::ProjectCollection;
use crate::PlutoResult;

/// Fonte de uma coleção de projetos atualizada.
///
/// Implementações são síncronas e rodam no pool de bloqueio.
pub trait ProjectSource: Send + Sync {
    /// Retorna a coleção com o estado atual da fonte.
    ///
    /// `None` indica que a raiz não existe; o chamador trata como coleção
    /// vazia, mas não deve gravá-la no cache.
    fn scan(&self) -> PlutoResult<Option<ProjectCollection>>;
}
