//! Projetos e a coleção ordenada que é cacheada e renderizada.

use serde::{Deserialize, Deserializer, Serialize};

use crate::PlutoResult;

/// Inteiro usado para ordenar projetos e versões.
///
/// Qualquer valor que não seja um inteiro de 64 bits ordena como `0`.
pub fn numeric_key(s: &str) -> i64 {
    s.parse::<i64>().unwrap_or(0)
}

/// Diretório de projeto e seus diretórios de versão.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Identificador do projeto (nome do diretório sem o prefixo).
    pub number: String,

    /// Nomes dos diretórios de versão, em ordem crescente do sufixo numérico.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub versions: Vec<String>,
}

// Outros escritores da chave gravam listas vazias como `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Project {
    /// Cria um projeto, ordenando as versões pelo inteiro após `version_prefix`.
    pub fn new(number: impl Into<String>, mut versions: Vec<String>, version_prefix: &str) -> Self {
        versions.sort_by_key(|v| numeric_key(v.strip_prefix(version_prefix).unwrap_or(v)));
        Self {
            number: number.into(),
            versions,
        }
    }

    /// Versão mais alta, se houver.
    pub fn latest_version(&self) -> Option<&str> {
        self.versions.last().map(String::as_str)
    }
}

/// Projetos em ordem decrescente de identificador.
///
/// Serializada como um array JSON de registros `{"number", "versions"}`. Uma
/// coleção lida do cache mantém a ordem gravada; `null` é lido como vazia.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectCollection(Vec<Project>);

impl<'de> Deserialize<'de> for ProjectCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        null_as_empty(deserializer).map(Self)
    }
}

impl ProjectCollection {
    /// Monta a coleção, ordenando os projetos de forma decrescente.
    pub fn sorted(mut projects: Vec<Project>) -> Self {
        projects.sort_by_key(|p| std::cmp::Reverse(numeric_key(&p.number)));
        Self(projects)
    }

    /// Coleção vazia.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn projects(&self) -> &[Project] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.0.iter()
    }

    /// Projeto atual (primeira entrada) e sua versão mais recente.
    pub fn current(&self) -> (Option<&Project>, Option<&str>) {
        let project = self.0.first();
        let version = project.and_then(Project::latest_version);
        (project, version)
    }

    /// Serializa para o JSON gravado no cache.
    pub fn to_json(&self) -> PlutoResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Lê o JSON do cache sem reordenar.
    pub fn from_json(raw: &str) -> PlutoResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl From<Vec<Project>> for ProjectCollection {
    fn from(projects: Vec<Project>) -> Self {
        Self(projects)
    }
}
