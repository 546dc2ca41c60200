//! Leitura da lista de projetos com cache.
//!
//! Fluxo de uma leitura:
//!
//! 1. Lê a chave do cache.
//! 2. Hit: desserializa e retorna sem tocar o disco.
//! 3. Miss: varre os diretórios, grava o resultado (melhor esforço) e retorna.
//!    Com a raiz ausente retorna lista vazia sem gravar.
//! 4. Qualquer outro erro do cache encerra a leitura.
//!
//! Misses concorrentes podem varrer e gravar em paralelo; a varredura é
//! determinística, então a última escrita vence sem prejuízo.
//!
//! ## Exemplo
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pluto_index::cache::MemoryCache;
//! use pluto_index::lookup::ProjectLookup;
//! use pluto_index::scanner::DirectoryScanner;
//!
//! let lookup = ProjectLookup::new(
//!     Arc::new(MemoryCache::new()),
//!     Arc::new(DirectoryScanner::new("/mnt/fastserver/projects", "project", "v")),
//!     "projects:list",
//! );
//! let projects = lookup.projects().await?;
//! ```

mod service;

pub use service::ProjectLookup;
