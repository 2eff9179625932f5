//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stdout (collected by the process supervisor or container runtime)
//! ```
//!
//! # Design Decisions
//! - Log level configurable per module via RUST_LOG
//! - HTTP request/response events come from tower-http's TraceLayer

pub mod logging;

pub use logging::init_logging;
