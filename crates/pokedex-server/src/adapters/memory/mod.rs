//! In-memory registry adapter

mod creature_registry;

pub use creature_registry::InMemoryCreatureRegistry;
