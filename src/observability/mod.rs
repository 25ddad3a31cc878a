//! Observability subsystem for landmarkd
//!
//! Structured JSON logging only: one line per event, synchronous writes,
//! deterministic key ordering.

pub mod logger;

pub use logger::{Logger, Severity};
