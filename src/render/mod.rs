//! Renderização da página HTML.
//!
//! O template é um arquivo Liquid lido do disco a cada requisição; edições
//! aparecem sem reiniciar o processo. Ele recebe:
//!
//! - `projects` - array de `{number, versions}`
//! - `current_project` - primeiro projeto (valores vazios quando não há)
//! - `current_version` - versão mais recente do projeto atual, ou `""`
//! - `current_url` - URL pública da versão atual, ou `""`
//!
//! Além dos filtros padrão do Liquid (`join` entre eles), o parser registra
//! um filtro `json` que gera um literal seguro dentro de `<script>`.

mod filters;
mod page;
mod template;

pub use filters::{script_safe_json, Json};
pub use page::{PageContext, UrlPattern};
pub use template::PageRenderer;
