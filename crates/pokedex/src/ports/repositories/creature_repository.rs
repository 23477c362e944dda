//! Creature Repository Port
//!
//! Abstract interface for the creature registry.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, CreateCreature, Creature};

/// Registry interface for creatures.
///
/// Implementations own the canonical collection and hand out copies only:
/// nothing returned here aliases live state.
#[async_trait]
pub trait CreatureRepository: Send + Sync {
    /// Snapshot of all creatures in collection order
    async fn list(&self) -> Vec<Creature>;

    /// Find a creature by ID
    async fn get(&self, id: u64) -> Result<Creature, DomainError>;

    /// Create a creature at level 1 with the next free ID
    async fn create(&self, input: CreateCreature) -> Creature;

    /// Delete a creature by ID
    async fn delete(&self, id: u64) -> Result<(), DomainError>;

    /// Apply the level-up transition
    async fn level_up(&self, id: u64, levels: u32) -> Result<Creature, DomainError>;
}
