//! Implementação dos comandos CLI do pluto-index.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache::build_cache;
use crate::lookup::ProjectLookup;
use crate::render::PageRenderer;
use crate::scanner::{DirectoryScanner, ProjectSource};
use crate::server::{self, AppState};
use crate::types::config::Config;
use crate::PlutoResult;

/// Template inicial gravado por `init`.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/render.html");

/// Inicializa configuração e template no diretório especificado.
pub async fn init(path: Option<PathBuf>) -> PlutoResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("pluto.toml");
    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
    } else {
        Config::default_config().save(&config_path)?;
        println!("Configuration created at: {}", config_path.display());
    }

    let template_path = target_dir.join("render.html");
    if template_path.exists() {
        println!("Template already exists at: {}", template_path.display());
    } else {
        std::fs::write(&template_path, DEFAULT_TEMPLATE)?;
        println!("Template created at: {}", template_path.display());
    }

    println!();
    println!("Next steps:");
    println!("  1. Point [scanner].root at the projects directory");
    println!("  2. Check the cache connection: pluto-index check");
    println!("  3. Start the server: pluto-index serve");

    Ok(())
}

/// Liga o cache e o scanner em um serviço de leitura.
async fn build_lookup(config: &Config) -> PlutoResult<ProjectLookup> {
    let cache = build_cache(&config.cache).await?;
    let scanner = Arc::new(DirectoryScanner::from_config(&config.scanner));
    Ok(ProjectLookup::new(cache, scanner, config.cache.key.clone()))
}

/// Inicia o servidor HTTP.
///
/// A conexão com o cache é validada antes de aceitar requisições; se falhar,
/// o processo termina com erro.
pub async fn serve(bind: Option<String>, config: &Config) -> PlutoResult<()> {
    let lookup = build_lookup(config).await?;
    let renderer = PageRenderer::from_config(&config.render);

    tracing::debug!(
        root = %config.scanner.root.display(),
        template = %config.render.template.display(),
        key = %config.cache.key,
        "Configuration loaded"
    );

    let addr = bind.unwrap_or_else(|| config.server.bind.clone());
    server::serve(&addr, AppState::new(lookup, renderer)).await
}

/// Varre os diretórios e imprime o resultado.
pub async fn scan(config: &Config) -> PlutoResult<()> {
    let scanner = DirectoryScanner::from_config(&config.scanner);
    let projects = tokio::task::spawn_blocking(move || scanner.scan())
        .await
        .map_err(|e| crate::PlutoError::other(format!("Scan task failed: {}", e)))??
        .unwrap_or_default();

    println!("{}", serde_json::to_string_pretty(&projects)?);
    Ok(())
}

/// Sobrescreve a chave do cache com uma varredura nova.
pub async fn refresh(config: &Config) -> PlutoResult<()> {
    let lookup = build_lookup(config).await?;
    let projects = lookup.refresh().await?;

    println!(
        "Stored {} project(s) under '{}'",
        projects.len(),
        lookup.key()
    );
    Ok(())
}

/// Verifica a conexão com o cache.
pub async fn check(config: &Config) -> PlutoResult<()> {
    let cache = build_cache(&config.cache).await?;
    cache.ping().await?;

    let cached = cache.get(&config.cache.key).await?;
    println!("✓ Cache '{}' reachable", cache.backend());
    match cached {
        Some(raw) => println!("✓ Key '{}' present ({} bytes)", config.cache.key, raw.len()),
        None => println!("○ Key '{}' not set yet", config.cache.key),
    }

    report_path("Projects root", &config.scanner.root);
    report_path("Template", &config.render.template);

    Ok(())
}

fn report_path(label: &str, path: &Path) {
    if path.exists() {
        println!("✓ {}: {}", label, path.display());
    } else {
        println!("○ {}: {} (missing)", label, path.display());
    }
}

/// Mostra versão.
pub fn version() {
    println!("pluto-index {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Project and version listing for goldpluto.com");
}
