//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! broker construction / resolution
//!     → tracing events (info!, debug!)
//!     → logging.rs subscriber (stderr)
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted messages
//! - Errors are returned to the caller and logged by the host, not here

pub mod logging;
