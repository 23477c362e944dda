//! Creature Application Service (Use Case)
//!
//! Orchestrates registry operations for the API: listing with filters and
//! sorting, creation, deletion and the level-up transition.

use std::collections::BTreeMap;
use std::sync::Arc;

use pokedex::{CreateCreature, Creature, CreatureRepository, DomainError};

/// Sort order for listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Registry order
    #[default]
    Insertion,
    /// Highest level first
    LevelDesc,
    /// Highest power first
    PowerDesc,
}

impl SortOrder {
    /// Unknown values keep registry order.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("level") => SortOrder::LevelDesc,
            Some("power") => SortOrder::PowerDesc,
            _ => SortOrder::Insertion,
        }
    }
}

/// Listing filter
#[derive(Debug, Clone, Default)]
pub struct CreatureFilter {
    /// Keep creatures having this type (case-insensitive)
    pub type_name: Option<String>,
    /// Keep creatures whose hit points are at least this value
    pub min_hp: Option<u32>,
    pub sort: SortOrder,
}

impl CreatureFilter {
    fn matches(&self, creature: &Creature) -> bool {
        let type_ok = match self.type_name.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(wanted) => creature
                .types
                .iter()
                .any(|t| t.as_str().eq_ignore_ascii_case(wanted)),
        };
        let hp_ok = self.min_hp.map_or(true, |min| creature.stats.hp >= min);
        type_ok && hp_ok
    }
}

/// Application service for creature operations
pub struct CreatureService<R: CreatureRepository> {
    repo: Arc<R>,
}

impl<R: CreatureRepository> CreatureService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List creatures matching `filter`, sorted as requested
    pub async fn list(&self, filter: &CreatureFilter) -> Vec<Creature> {
        let mut creatures: Vec<Creature> = self
            .repo
            .list()
            .await
            .into_iter()
            .filter(|c| filter.matches(c))
            .collect();

        // Stable sorts: ties keep registry order.
        match filter.sort {
            SortOrder::Insertion => {}
            SortOrder::LevelDesc => creatures.sort_by(|a, b| b.level.cmp(&a.level)),
            SortOrder::PowerDesc => creatures.sort_by(|a, b| b.power().cmp(&a.power())),
        }
        creatures
    }

    /// Number of creatures per type, keyed by lower-case type name.
    ///
    /// Counted over one snapshot; a dual-typed creature counts once for each type.
    pub async fn type_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for creature in self.repo.list().await {
            for creature_type in &creature.types {
                *counts.entry(creature_type.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    pub async fn get(&self, id: u64) -> Result<Creature, DomainError> {
        self.repo.get(id).await
    }

    pub async fn create(&self, input: CreateCreature) -> Creature {
        self.repo.create(input).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), DomainError> {
        self.repo.delete(id).await
    }

    /// Level up by `levels`; missing or zero means one level
    pub async fn level_up(&self, id: u64, levels: Option<u32>) -> Result<Creature, DomainError> {
        let levels = levels.filter(|l| *l > 0).unwrap_or(1);
        self.repo.level_up(id, levels).await
    }
}
