use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use viktor_api::AppState;
use viktor_core::config::Config;

#[derive(Parser)]
#[command(name = "viktor", about = "Physics formula explorer — demo JSON API")]
struct Cli {
    /// Config file to layer over the built-in defaults
    /// (default: ~/.config/viktor/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Address to bind, overriding `server.host`.
    #[arg(long)]
    host: Option<String>,
    /// Port to bind, overriding `server.port`.
    #[arg(long)]
    port: Option<u16>,
    /// JSON formula catalog to serve instead of the builtin sample.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!("loading config {}", Config::default_path().display())
        })?,
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }

    let catalog = config.catalog.load().context("loading formula catalog")?;
    tracing::info!(
        "catalog ready: {} formulas across {} domains",
        catalog.len(),
        catalog.domains_covered()
    );

    let app = viktor_api::router(Arc::new(AppState::new(catalog, &config)));

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
