//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the pipeline and application layer
//! reach the creature registry. Implementations live in the server crate.

pub mod repositories;

// Re-exports
pub use repositories::*;
