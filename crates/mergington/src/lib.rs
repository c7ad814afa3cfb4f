//! The shared library for Mergington, the school extracurricular activities service.
//!
//! This library provides the wire data structures exchanged with clients,
//! the domain error types, and the logging setup used by the backend.

pub mod data;
pub mod errors;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
