//! Renderizador da página a partir de um arquivo de template.

use std::path::{Path, PathBuf};

use crate::types::config::RenderConfig;
use crate::types::project::ProjectCollection;
use crate::{PlutoError, PlutoResult};

use super::filters::Json;
use super::page::{PageContext, UrlPattern};

/// Renderiza a página de projetos a partir de um template Liquid em disco.
///
/// O arquivo é lido e interpretado a cada chamada. A página inteira é
/// montada em memória; uma falha nunca deixa resposta parcial.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    template: PathBuf,
    url_pattern: UrlPattern,
}

impl PageRenderer {
    pub fn new(template: impl Into<PathBuf>, url_pattern: UrlPattern) -> Self {
        Self {
            template: template.into(),
            url_pattern,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(
            config.template.clone(),
            UrlPattern::new(config.url_pattern.clone()),
        )
    }

    pub fn template_path(&self) -> &Path {
        &self.template
    }

    /// Parser Liquid com a biblioteca padrão e o filtro `json`.
    pub fn parser() -> PlutoResult<liquid::Parser> {
        liquid::ParserBuilder::with_stdlib()
            .filter(Json)
            .build()
            .map_err(PlutoError::TemplateParse)
    }

    /// Renderiza a página para `projects`.
    ///
    /// Template ausente ou inválido é [`PlutoError::TemplateParse`]; falha na
    /// execução é [`PlutoError::TemplateRender`].
    pub async fn render(&self, projects: ProjectCollection) -> PlutoResult<String> {
        let source = tokio::fs::read_to_string(&self.template)
            .await
            .map_err(|e| {
                PlutoError::TemplateParse(liquid::Error::with_msg(format!(
                    "cannot read {}: {}",
                    self.template.display(),
                    e
                )))
            })?;

        let page = PageContext::new(projects, &self.url_pattern);
        self.render_source(&source, &page)
    }

    /// Renderiza um template já carregado em memória.
    pub fn render_source(&self, source: &str, page: &PageContext) -> PlutoResult<String> {
        let template = Self::parser()?
            .parse(source)
            .map_err(PlutoError::TemplateParse)?;
        let globals = liquid::to_object(page).map_err(PlutoError::TemplateRender)?;

        template.render(&globals).map_err(PlutoError::TemplateRender)
    }
}
