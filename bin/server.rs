// GPA Summary - Web Server

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use gpa_summary::config::{load_config_with_source, ConfigSource};
use gpa_summary::{api, logger};

#[derive(Debug, Parser)]
#[command(name = "gpa-server")]
#[command(about = "HTTP server for student GPA summaries", version)]
struct Args {
    #[arg(long, default_value = "gpa-summary.toml")]
    config: PathBuf,

    /// Overrides [server] bind from the config file
    #[arg(long)]
    bind: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, source) = load_config_with_source(&args.config)
        .with_context(|| format!("Failed to load config {:?}", args.config))?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    if args.json_logs {
        logger::init_json_logger(&config.logging.level, args.verbose);
    } else {
        logger::init_logger(&config.logging.level, args.verbose);
    }

    match source {
        ConfigSource::File(path) => tracing::info!("Loaded config from {:?}", path),
        ConfigSource::Defaults => {
            tracing::warn!("Config file {:?} not found, using defaults", args.config)
        }
    }

    let addr = config.server.bind_addr()?;
    let app = api::router(&config.server);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("🚀 GPA summary server listening on http://{}", addr);
    tracing::info!("   POST http://{}/student_summary", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
