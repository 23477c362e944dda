//! Creature - One catalog record
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::{errors::DomainError, value_objects::CreatureType, LoadError};

/// Highest level a creature can reach
pub const MAX_LEVEL: u32 = 100;

/// Base experience gained per level
pub const EXPERIENCE_PER_LEVEL: u32 = 10;

/// Hit points gained per level
pub const HP_PER_LEVEL: u32 = 2;

/// Attack, defense and speed gained per level
pub const COMBAT_STAT_PER_LEVEL: u32 = 1;

/// Combat statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl Stats {
    fn grow(&mut self, levels: u32) {
        self.hp = self.hp.saturating_add(HP_PER_LEVEL.saturating_mul(levels));
        let combat = COMBAT_STAT_PER_LEVEL.saturating_mul(levels);
        self.attack = self.attack.saturating_add(combat);
        self.defense = self.defense.saturating_add(combat);
        self.speed = self.speed.saturating_add(combat);
    }
}

/// Cosmetic sprite references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: String,
    #[serde(default)]
    pub back_default: String,
}

/// Creature - one record of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u64,
    pub name: String,
    pub level: u32,
    #[serde(rename = "baseExperience")]
    pub base_experience: u32,
    pub weight: u32,
    pub height: u32,
    pub types: Vec<CreatureType>,
    pub stats: Stats,
    #[serde(default)]
    pub sprites: Sprites,
}

/// Input for creating a creature. `id` and `level` are assigned by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCreature {
    pub name: String,
    pub base_experience: u32,
    pub weight: u32,
    pub height: u32,
    pub types: Vec<CreatureType>,
    pub stats: Stats,
    pub sprites: Sprites,
}

/// One entry of the startup data file. Older files carry no `level`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatureRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(rename = "baseExperience", default)]
    pub base_experience: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub height: u32,
    pub types: Vec<CreatureType>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub sprites: Sprites,
}

impl Creature {
    /// Build a freshly created creature at level 1
    pub fn new(id: u64, input: CreateCreature) -> Self {
        Self {
            id,
            name: input.name,
            level: 1,
            base_experience: input.base_experience,
            weight: input.weight,
            height: input.height,
            types: dedup_types(input.types),
            stats: input.stats,
            sprites: input.sprites,
        }
    }

    /// Combat power shown by the API: hp * attack
    pub fn power(&self) -> u64 {
        u64::from(self.stats.hp) * u64::from(self.stats.attack)
    }

    /// Raise the level by `levels` (0 counts as 1) and grow the stats accordingly.
    ///
    /// Rejected with `MaxLevelReached` when the creature is already at
    /// [`MAX_LEVEL`]; an increment that would cross the cap is clamped to it.
    /// Returns the number of levels actually gained.
    pub fn level_up(&mut self, levels: u32) -> Result<u32, DomainError> {
        if self.level >= MAX_LEVEL {
            return Err(DomainError::MaxLevelReached {
                id: self.id,
                level: self.level,
            });
        }

        let gained = levels.max(1).min(MAX_LEVEL - self.level);
        self.level += gained;
        self.base_experience = self
            .base_experience
            .saturating_add(EXPERIENCE_PER_LEVEL.saturating_mul(gained));
        self.stats.grow(gained);

        Ok(gained)
    }
}

impl CreatureRecord {
    /// Normalize a record into a creature: missing or zero level becomes 1,
    /// levels above the cap are clamped, duplicate types collapse.
    pub fn into_creature(self) -> Result<Creature, LoadError> {
        if self.id == 0 {
            return Err(LoadError::InvalidRecord {
                id: self.id,
                reason: "id must be positive".to_string(),
            });
        }

        let types = dedup_types(self.types);
        if types.is_empty() || types.len() > 2 {
            return Err(LoadError::InvalidRecord {
                id: self.id,
                reason: format!("expected 1 or 2 distinct types, got {}", types.len()),
            });
        }

        Ok(Creature {
            id: self.id,
            name: self.name,
            level: self.level.unwrap_or(1).clamp(1, MAX_LEVEL),
            base_experience: self.base_experience,
            weight: self.weight,
            height: self.height,
            types,
            stats: self.stats,
            sprites: self.sprites,
        })
    }
}

fn dedup_types(types: Vec<CreatureType>) -> Vec<CreatureType> {
    let mut unique = Vec::with_capacity(types.len());
    for t in types {
        if !unique.contains(&t) {
            unique.push(t);
        }
    }
    unique
}
