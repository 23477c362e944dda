//! Application Layer (Use Cases)
//!
//! Orchestrates registry operations for the HTTP routes.

mod creature_service;

pub use creature_service::{CreatureFilter, CreatureService, SortOrder};
