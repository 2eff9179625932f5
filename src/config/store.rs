//! Shared storage for the current configuration.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::LinksConfig;

/// Single source of truth for the current [`LinksConfig`].
///
/// Readers get an `Arc` snapshot and are never blocked by a concurrent
/// replacement; the writer swaps a pointer and never waits for readers.
/// No lock is held while rendering or while reading the file from disk.
///
/// The `ArcSwap` is itself wrapped in an `Arc` so the store can be cloned
/// into the watcher task and the HTTP state while observing one value.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<ArcSwap<LinksConfig>>,
}

impl ConfigStore {
    /// Create a store seeded with an initial configuration.
    pub fn new(initial: LinksConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(initial)),
        }
    }

    /// Snapshot of the current configuration.
    ///
    /// A replacement after this call does not change what was returned.
    pub fn get(&self) -> Arc<LinksConfig> {
        self.inner.load_full()
    }

    /// Atomically publish a new configuration, superseding the current one.
    ///
    /// Never fails; no validation happens at this layer. The old value is
    /// dropped once the last reader releases its snapshot.
    pub fn replace(&self, next: LinksConfig) {
        tracing::info!(links = next.links.len(), "Configuration replaced");
        self.inner.store(Arc::new(next));
    }
}
