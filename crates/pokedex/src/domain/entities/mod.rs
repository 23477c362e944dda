//! Domain Entities
//!
//! - Creature: one catalog record with identity, level, stats
//! - CreateCreature: creation input consumed by the registry
//! - CreatureRecord: ingestion format of the startup data file

mod creature;

pub use creature::*;
