//! Launchdeck server
//!
//! Personal launcher backend: stores a collection of link tiles in a single
//! JSON file and serves a read/replace API plus the front-end entry file.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use launchdeck_core::{Config, LinkStore};
use launchdeck_server::router;

/// Launchdeck - personal launcher backend
#[derive(Parser, Debug)]
#[command(name = "launchdeck")]
#[command(about = "Personal launcher backend")]
#[command(version)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long)]
    addr: Option<SocketAddr>,

    /// Directory holding the link collection file
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Front-end entry file served for non-API paths
    #[arg(long)]
    index_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(addr) = args.addr {
        config.bind_addr = addr;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(index_file) = args.index_file {
        config.index_file = index_file;
    }

    // The service refuses to run without a writable data store
    let store = LinkStore::open(&config).context("Failed to initialize link store")?;
    info!("link store ready at {}", store.path().display());

    let app = router::build_router(&config, store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Server starting on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    Ok(())
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("launchdeck_server=info,launchdeck_core=info,tower_http=warn")
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => tracing::warn!("failed to listen for shutdown signal: {err}"),
    }
}
