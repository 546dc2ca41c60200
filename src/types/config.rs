//! Configuration for pluto-index.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::PlutoResult;

/// Main configuration for pluto-index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Directory scanner settings.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Page rendering settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the listener binds to.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

/// Available cache backends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CacheBackend {
    /// Shared Redis instance.
    Redis,
    /// Process-local map, for running without Redis.
    Memory,
}

/// Cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Backend used to store the project list.
    #[serde(default = "default_cache_backend")]
    pub backend: CacheBackend,

    /// Redis connection URL.
    #[serde(default = "default_cache_url")]
    pub url: String,

    /// Key holding the serialized project list.
    #[serde(default = "default_cache_key")]
    pub key: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: default_cache_backend(),
            url: default_cache_url(),
            key: default_cache_key(),
        }
    }
}

fn default_cache_backend() -> CacheBackend {
    CacheBackend::Redis
}

fn default_cache_url() -> String {
    "redis://127.0.0.1:6379/0".to_string()
}

fn default_cache_key() -> String {
    "projects:list".to_string()
}

/// Directory scanner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Directory holding the project directories.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Prefix of project directory names.
    #[serde(default = "default_project_prefix")]
    pub project_prefix: String,

    /// Prefix of version directory names.
    #[serde(default = "default_version_prefix")]
    pub version_prefix: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            project_prefix: default_project_prefix(),
            version_prefix: default_version_prefix(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("/mnt/fastserver/projects")
}

fn default_project_prefix() -> String {
    "project".to_string()
}

fn default_version_prefix() -> String {
    "v".to_string()
}

/// Page rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Template file, read on every request.
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Public URL of a version; `{project}` and `{version}` are substituted.
    #[serde(default = "default_url_pattern")]
    pub url_pattern: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            url_pattern: default_url_pattern(),
        }
    }
}

fn default_template() -> PathBuf {
    PathBuf::from("render.html")
}

fn default_url_pattern() -> String {
    "https://goldpluto.com/project{project}/{version}/index.html".to_string()
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> PlutoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> PlutoResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            scanner: ScannerConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.cache.backend, CacheBackend::Redis);
        assert_eq!(config.cache.key, "projects:list");
        assert_eq!(config.scanner.project_prefix, "project");
        assert_eq!(config.scanner.version_prefix, "v");
        assert_eq!(config.render.template, PathBuf::from("render.html"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [cache]
            backend = "memory"

            [scanner]
            root = "/srv/projects"
            "#,
        )
        .unwrap();

        assert_eq!(config.cache.backend, CacheBackend::Memory);
        assert_eq!(config.cache.key, "projects:list");
        assert_eq!(config.scanner.root, PathBuf::from("/srv/projects"));
        assert_eq!(config.scanner.version_prefix, "v");
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pluto.toml");

        let mut config = Config::default();
        config.server.bind = "127.0.0.1:9090".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.server.bind, "127.0.0.1:9090");
        assert_eq!(loaded.render.url_pattern, config.render.url_pattern);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pluto.toml");
        std::fs::write(&path, "[cache\nbackend = ").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(crate::PlutoError::TomlParse(_))
        ));
    }
}
