//! HTTP surface of the link page.
//!
//! # Data Flow
//! ```text
//! GET /
//!     → server.rs (Axum route, trace middleware)
//!     → ConfigStore::get (snapshot, lock-free)
//!     → render.rs (tera template → HTML)
//!     → 200 text/html, or 500 text/plain with the render error
//! ```

pub mod render;
pub mod server;

pub use render::{build_templates, render_links, TemplateError, LINKS_TEMPLATE};
pub use server::{AppState, HttpServer};
