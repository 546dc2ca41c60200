use clap::Parser;
use pluto_index::cli::{Cli, Commands};
use pluto_index::types::config::Config;
use pluto_index::PlutoResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> PlutoResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pluto_index={}", log_level)));

    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            pluto_index::cli::commands::init(path).await?;
        }
        Commands::Serve { bind } => {
            pluto_index::cli::commands::serve(bind, &config).await?;
        }
        Commands::Scan => {
            pluto_index::cli::commands::scan(&config).await?;
        }
        Commands::Refresh => {
            pluto_index::cli::commands::refresh(&config).await?;
        }
        Commands::Check => {
            pluto_index::cli::commands::check(&config).await?;
        }
        Commands::Version => {
            pluto_index::cli::commands::version();
        }
    }

    Ok(())
}
