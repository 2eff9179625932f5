//! Configuration file watcher for hot reload.
//!
//! Watches the directory *containing* the config file, not the file itself.
//! Orchestrator-managed config mounts update the file by atomically
//! re-pointing a symlink, and a watch on the old inode goes silent after the
//! first swap; the directory sees the create/rename events either way.
//!
//! Any create or modify event in that directory triggers a reload of the
//! config path, without re-checking which file changed. Reloads are
//! idempotent and cheap, so an unrelated neighbour file at worst causes a
//! no-op re-parse.

use std::path::{Path, PathBuf};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::config::loader::load_config;
use crate::config::store::ConfigStore;

/// Watches the config file's directory and republishes the config on change.
pub struct ConfigWatcher {
    path: PathBuf,
    store: ConfigStore,
}

/// Handle to a running watcher.
///
/// Owns the OS watch; dropping the handle releases it and stops event
/// delivery.
pub struct WatcherHandle {
    _watcher: RecommendedWatcher,
    task: JoinHandle<()>,
}

impl WatcherHandle {
    /// Wait for the watch task to finish.
    ///
    /// The task exits once the shutdown signal it subscribed to fires.
    pub async fn join(self) {
        let WatcherHandle { _watcher, task } = self;
        let _ = task.await;
    }
}

impl ConfigWatcher {
    /// Create a watcher for `path`, publishing reloads into `store`.
    pub fn new(path: PathBuf, store: ConfigStore) -> Self {
        Self { path, store }
    }

    /// Establish the watch and start the reload task.
    ///
    /// Fails if the watch cannot be established (directory missing,
    /// inotify limits). Once running, a failed reload keeps the current
    /// configuration and errors from the watch backend are logged; the
    /// task itself only stops when `shutdown` fires.
    pub fn spawn(
        self,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<WatcherHandle, notify::Error> {
        let ConfigWatcher { path, store } = self;
        let dir = watch_dir(&path);

        let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    if event.kind.is_create() || event.kind.is_modify() {
                        let _ = tx.send(event);
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "File watch error; continuing with current configuration");
                }
            }
        })?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(
            directory = %dir.display(),
            file = %path.display(),
            "Config watcher started"
        );

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown.recv() => {
                        tracing::debug!("Config watcher stopping");
                        break;
                    }
                    event = rx.recv() => match event {
                        Some(event) => reload(&path, &store, &event),
                        None => {
                            // Watch handle dropped; no further events will come.
                            tracing::error!("File watch closed; configuration is frozen at the last loaded value");
                            break;
                        }
                    }
                }
            }
        });

        Ok(WatcherHandle {
            _watcher: watcher,
            task,
        })
    }
}

/// Re-read the config file and swap it in, or keep the current one.
fn reload(path: &Path, store: &ConfigStore, event: &Event) {
    tracing::info!(paths = ?event.paths, kind = ?event.kind, "Config directory changed, reloading");
    match load_config(path) {
        Ok(next) => store.replace(next),
        Err(e) => {
            tracing::error!(error = %e, "Failed to reload config, keeping current configuration");
        }
    }
}

/// Directory to watch for a given config path.
///
/// A bare filename like `config.yaml` has an empty parent, which notify
/// rejects; that case watches the current directory.
fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
