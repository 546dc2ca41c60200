//! Tipos de erro do pluto-index.

use thiserror::Error;

/// Tipo de resultado padrão do pluto-index.
pub type PlutoResult<T> = Result<T, PlutoError>;

/// Erros possíveis no pluto-index.
#[derive(Error, Debug)]
pub enum PlutoError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erro no Redis: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Erro no cache: {0}")]
    Cache(String),

    #[error("Erro ao listar diretório: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Erro ao varrer projetos: {0}")]
    Scan(String),

    #[error("Erro ao parsear template: {0}")]
    TemplateParse(liquid::Error),

    #[error("Erro ao executar template: {0}")]
    TemplateRender(liquid::Error),

    #[error("{0}")]
    Other(String),
}

impl PlutoError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Cria um erro de cache.
    pub fn cache<S: Into<String>>(msg: S) -> Self {
        Self::Cache(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_build_expected_variants() {
        assert!(matches!(PlutoError::other("x"), PlutoError::Other(_)));
        assert!(matches!(PlutoError::config("x"), PlutoError::Config(_)));
        assert!(matches!(PlutoError::cache("x"), PlutoError::Cache(_)));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PlutoError = io.into();
        assert!(matches!(err, PlutoError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
