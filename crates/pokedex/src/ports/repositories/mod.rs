//! Repository Ports

mod creature_repository;

pub use creature_repository::*;
