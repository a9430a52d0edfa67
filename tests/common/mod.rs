//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use agent_site::config::SiteConfig;
use agent_site::lifecycle::Shutdown;
use agent_site::SiteServer;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// A site server running on an ephemeral local port.
pub struct TestSite {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    #[allow(dead_code)]
    pub config_updates: mpsc::UnboundedSender<SiteConfig>,
}

impl TestSite {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestSite {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the server with `config` and wait until it accepts connections.
pub async fn start_site(config: SiteConfig) -> TestSite {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (config_updates, updates_rx) = mpsc::unbounded_channel();
    let server = SiteServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, updates_rx, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    TestSite {
        addr,
        shutdown,
        config_updates,
    }
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
