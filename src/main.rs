//! Hot-reloading HTML link dashboard.
//!
//! Serves a single page of links read from a YAML file, and picks up
//! edits to that file without a restart.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌───────────────────────────────────────────┐
//!                 │                 LINKBOARD                  │
//!                 │                                            │
//!   GET /         │  ┌─────────┐    ┌──────────┐              │
//!   ──────────────┼─▶│  http   │───▶│ template │              │
//!                 │  │ server  │    │  render  │              │
//!   HTML page     │  └────┬────┘    └──────────┘              │
//!   ◀─────────────┼───────┘ ▲                                 │
//!                 │         │ snapshot                        │
//!                 │  ┌──────┴──────┐     ┌────────────────┐   │
//!                 │  │   config    │◀────│  file watcher  │◀──┼── config.yaml
//!                 │  │   store     │     │  (reload)      │   │   edits
//!                 │  └─────────────┘     └────────────────┘   │
//!                 └───────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use linkboard::cli::Cli;
use linkboard::config::{load_config, ConfigStore, ConfigWatcher};
use linkboard::http::{build_templates, HttpServer};
use linkboard::lifecycle::{wait_for_signal, Shutdown};
use linkboard::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse();

    tracing::info!(
        config = %cli.config.display(),
        bind_addr = %cli.bind_addr,
        port = cli.port,
        "linkboard v0.1.0 starting"
    );

    if !cli.config.exists() {
        tracing::error!(path = %cli.config.display(), "Config file not found");
        std::process::exit(1);
    }

    let initial = load_config(&cli.config)?;
    tracing::info!(links = initial.links.len(), "Configuration loaded");

    let store = ConfigStore::new(initial);
    let templates = Arc::new(build_templates()?);

    let shutdown = Shutdown::new();
    let server_rx = shutdown.subscribe();
    let watcher_rx = shutdown.subscribe();

    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    let watcher = ConfigWatcher::new(cli.config.clone(), store.clone()).spawn(watcher_rx)?;

    let listener = TcpListener::bind(format!("{}:{}", cli.bind_addr, cli.port)).await?;

    let server = HttpServer::new(store, templates);
    server.run(listener, server_rx).await?;

    watcher.join().await;

    tracing::info!("Shutdown complete");
    Ok(())
}
