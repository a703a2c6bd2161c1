//! Security subsystem.
//!
//! # Design Decisions
//! - Authentication happens in the host; this crate only carries the result
//! - Identity travels in an explicit per-request context, never a global

pub mod context;

pub use context::{RequestContext, User};
