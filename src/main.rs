//! Marketing site server.
//!
//! # Architecture Overview
//!
//! ```text
//!                          ┌──────────────────────────────────────────────────┐
//!                          │                   SITE SERVER                    │
//!                          │                                                  │
//!   Client Request         │  ┌──────────┐   ┌──────────────┐   ┌──────────┐  │
//!   ───────────────────────┼─▶│  layers  │──▶│  legacy URL  │──▶│  routes  │  │
//!                          │  │ id/trace │   │  interceptor │   │ + pages  │  │
//!                          │  └──────────┘   └──────┬───────┘   └────┬─────┘  │
//!                          │                        │ 301            │ miss   │
//!   Client Response        │                        ▼                ▼        │
//!   ◀──────────────────────┼────────────────── redirect      not-found page   │
//!                          │                                                  │
//!                          │  ┌────────────────────────────────────────────┐  │
//!                          │  │ site snapshot (arc-swap): rule, pages,     │  │
//!                          │  │ sitemap.xml, robots.txt, analytics         │  │
//!                          │  └────────────────────────────────────────────┘  │
//!                          │        ▲ config watcher (notify) rebuilds        │
//!                          └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use agent_site::config::{load_config, watcher::ConfigWatcher, SiteConfig};
use agent_site::lifecycle::{signals, Shutdown};
use agent_site::observability::{logging, metrics};
use agent_site::{SiteError, SiteServer};

#[derive(Parser)]
#[command(name = "agent-site")]
#[command(about = "Marketing site server", long_about = None)]
struct Args {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long, env = "SITE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), SiteError> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!("agent-site v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_url = %config.site.base_url,
        interceptor_enabled = config.interceptor.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr).map_err(SiteError::Metrics)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // The watcher must outlive the server; dropping it stops notifications.
    let (_watcher, config_updates) = match &args.config {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (Some(watcher.run()?), updates)
        }
        None => {
            let (_, updates) = mpsc::unbounded_channel();
            (None, updates)
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(&shutdown);

    let server = SiteServer::new(config)?;
    server.run(listener, config_updates, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
