//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use linkboard::config::{load_config, ConfigStore, ConfigWatcher, WatcherHandle};
use linkboard::http::{build_templates, HttpServer};
use linkboard::lifecycle::Shutdown;

/// A dashboard instance serving from `config_path`, with its watcher running.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    _watcher: WatcherHandle,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }
}

/// Start a full instance (store, watcher, HTTP server) on an ephemeral port.
pub async fn spawn_server(config_path: &Path) -> TestServer {
    let initial = load_config(config_path).unwrap();
    let store = ConfigStore::new(initial);
    let templates = Arc::new(build_templates().unwrap());

    let shutdown = Shutdown::new();
    let server_rx = shutdown.subscribe();
    let watcher_rx = shutdown.subscribe();

    let watcher = ConfigWatcher::new(config_path.to_path_buf(), store.clone())
        .spawn(watcher_rx)
        .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(store, templates);
    tokio::spawn(async move {
        let _ = server.run(listener, server_rx).await;
    });

    TestServer {
        addr,
        shutdown,
        _watcher: watcher,
    }
}

/// Poll `url` until the body contains `needle`, returning that body.
///
/// Panics after five seconds without a match.
#[allow(dead_code)]
pub async fn wait_for_body(client: &reqwest::Client, url: &str, needle: &str) -> String {
    let mut last = String::new();
    for _ in 0..50 {
        if let Ok(res) = client.get(url).send().await {
            if let Ok(body) = res.text().await {
                if body.contains(needle) {
                    return body;
                }
                last = body;
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!(
        "body at {} never contained {:?}; last body:\n{}",
        url, needle, last
    );
}
