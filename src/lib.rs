//! # pluto-index
//!
//! Listagem de projetos e versões publicados em goldpluto.com.
//!
//! Os projetos vivem em `<root>/projectN/vM/`. A lista é lida de uma chave
//! no Redis; num miss, os diretórios são varridos e o resultado é gravado
//! de volta. A página `GET /go` é renderizada a partir de um template Liquid.
//!
//! ## Módulos
//!
//! - [`cli`] - Interface de linha de comando
//! - [`server`] - Endpoints HTTP (axum)
//! - [`lookup`] - Leitura cache-ou-varredura
//! - [`scanner`] - Varredura dos diretórios de projetos
//! - [`cache`] - Backends de cache (Redis, memória)
//! - [`render`] - Renderização da página
//! - [`types`] - Tipos compartilhados

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod lookup;
pub mod render;
pub mod scanner;
pub mod server;
pub mod types;

pub use types::config::Config;
pub use types::errors::{PlutoError, PlutoResult};
pub use types::project::{Project, ProjectCollection};
