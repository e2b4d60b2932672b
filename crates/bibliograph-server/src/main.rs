use std::env;

use bibliograph_server::config::loader::load_config;
use bibliograph_server::observability;

/// How the configuration path was determined.
#[derive(Debug, Clone, Copy)]
enum ConfigSource {
    /// From --config CLI argument
    CliArgument,
    /// From BIBLIOGRAPH_CONFIG environment variable
    EnvironmentVariable,
    /// Default path (bibliograph.toml)
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CliArgument => write!(f, "CLI argument (--config)"),
            Self::EnvironmentVariable => write!(f, "environment variable (BIBLIOGRAPH_CONFIG)"),
            Self::Default => write!(f, "default"),
        }
    }
}

fn resolve_config_path() -> (Option<String>, ConfigSource) {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            if let Some(path) = args.next() {
                return (Some(path), ConfigSource::CliArgument);
            }
        }
    }
    if let Ok(path) = env::var("BIBLIOGRAPH_CONFIG") {
        return (Some(path), ConfigSource::EnvironmentVariable);
    }
    (None, ConfigSource::Default)
}

#[tokio::main]
async fn main() {
    // Load .env if present, before reading any configuration.
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            eprintln!("Warning: Failed to load .env file: {e}");
        }
    }

    // Initialize tracing early with the default level.
    observability::init_tracing();

    let (config_path, source) = resolve_config_path();

    let cfg = match load_config(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(2);
        }
    };

    tracing::info!(
        path = config_path.as_deref().unwrap_or("bibliograph.toml"),
        source = %source,
        "Configuration loaded"
    );

    observability::apply_logging_level(&cfg.logging.level);

    if let Err(e) = bibliograph_server::run(cfg).await {
        tracing::error!(error = %e, "server exited with error");
        std::process::exit(1);
    }
}
