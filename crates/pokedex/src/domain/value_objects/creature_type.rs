//! CreatureType - Elemental type of a creature

use serde::{Deserialize, Deserializer, Serialize};

/// Elemental type. Stored and serialized lower-case, parsed case-insensitively.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CreatureType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl CreatureType {
    pub const ALL: [CreatureType; 18] = [
        CreatureType::Normal,
        CreatureType::Fire,
        CreatureType::Water,
        CreatureType::Grass,
        CreatureType::Electric,
        CreatureType::Ice,
        CreatureType::Fighting,
        CreatureType::Poison,
        CreatureType::Ground,
        CreatureType::Flying,
        CreatureType::Psychic,
        CreatureType::Bug,
        CreatureType::Rock,
        CreatureType::Ghost,
        CreatureType::Dragon,
        CreatureType::Dark,
        CreatureType::Steel,
        CreatureType::Fairy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreatureType::Normal => "normal",
            CreatureType::Fire => "fire",
            CreatureType::Water => "water",
            CreatureType::Grass => "grass",
            CreatureType::Electric => "electric",
            CreatureType::Ice => "ice",
            CreatureType::Fighting => "fighting",
            CreatureType::Poison => "poison",
            CreatureType::Ground => "ground",
            CreatureType::Flying => "flying",
            CreatureType::Psychic => "psychic",
            CreatureType::Bug => "bug",
            CreatureType::Rock => "rock",
            CreatureType::Ghost => "ghost",
            CreatureType::Dragon => "dragon",
            CreatureType::Dark => "dark",
            CreatureType::Steel => "steel",
            CreatureType::Fairy => "fairy",
        }
    }
}

impl std::fmt::Display for CreatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CreatureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CreatureType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| format!("Unknown creature type: {}", s))
    }
}

impl<'de> Deserialize<'de> for CreatureType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
