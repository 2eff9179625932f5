//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML)
//!     → loader.rs (read & deserialize)
//!     → LinksConfig (immutable value)
//!     → published through ConfigStore (atomic swap)
//!
//! On file change:
//!     watcher.rs sees a create/modify event in the config directory
//!     → loader.rs loads the file again
//!     → ConfigStore::replace swaps in the new value
//!     → request handlers observe it on their next get()
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a change replaces the whole value
//! - Schema is permissive: absent fields default, nothing is validated
//! - A failed reload keeps the last-known-good configuration

pub mod loader;
pub mod schema;
pub mod store;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{Link, LinksConfig};
pub use store::ConfigStore;
pub use watcher::{ConfigWatcher, WatcherHandle};
