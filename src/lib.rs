//! Hot-reloading HTML link dashboard library.

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::LinksConfig;
pub use config::store::ConfigStore;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
