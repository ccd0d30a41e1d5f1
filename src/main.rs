use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use clark_api::config::config;
use clark_api::mapper::PropertyMap;
use clark_api::server;
use clark_api::state::AppState;

#[derive(Parser)]
#[command(name = "clark-api")]
#[command(about = "Clark & Nora family-agent API server")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Port to listen on (overrides CLARK_API_PORT / PORT)")]
    port: Option<u16>,

    #[arg(long, help = "YAML file mapping logical fields to Notion property names")]
    property_map: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up NOTION_TOKEN and database ids
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("clark_api=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = config().clone();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(path) = cli.property_map {
        config.properties = PropertyMap::from_yaml_file(&path)?;
    }
    tracing::info!("Starting Clark API in {:?} mode", config.environment);

    let state = AppState::from_config(&config).context("failed to build Notion client")?;
    let app = server::app(state, &config.security);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("🏎️ Clark API Server running on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
