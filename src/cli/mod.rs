//! Interface de linha de comando do pluto-index.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pluto-index - listagem de projetos e versões.
#[derive(Parser, Debug)]
#[command(name = "pluto-index")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "pluto.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração e template no diretório.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Inicia o servidor HTTP.
    Serve {
        /// Endereço de escuta (sobrescreve a configuração).
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Varre os diretórios e imprime a lista em JSON, sem usar o cache.
    Scan,

    /// Varre os diretórios e sobrescreve a chave do cache.
    Refresh,

    /// Verifica a conexão com o cache.
    Check,

    /// Mostra versão.
    Version,
}
