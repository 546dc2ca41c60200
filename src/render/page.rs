//! Dados entregues ao template da página.

use serde::Serialize;

use crate::types::project::{Project, ProjectCollection};

/// Padrão da URL pública com os marcadores `{project}` e `{version}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPattern(String);

impl UrlPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Substitui os marcadores.
    pub fn expand(&self, project: &str, version: &str) -> String {
        self.0
            .replace("{project}", project)
            .replace("{version}", version)
    }
}

/// Variáveis globais do template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageContext {
    pub projects: ProjectCollection,
    pub current_project: Project,
    pub current_version: String,
    pub current_url: String,
}

impl PageContext {
    /// Deriva o projeto, a versão e a URL atuais.
    ///
    /// Sem projetos, ou com o projeto atual sem versões, esses campos ficam
    /// vazios.
    pub fn new(projects: ProjectCollection, url_pattern: &UrlPattern) -> Self {
        let (project, version) = projects.current();
        let current_project = project.cloned().unwrap_or_default();
        let (current_version, current_url) = match version {
            Some(version) => (
                version.to_string(),
                url_pattern.expand(&current_project.number, version),
            ),
            None => (String::new(), String::new()),
        };

        Self {
            projects,
            current_project,
            current_version,
            current_url,
        }
    }
}
