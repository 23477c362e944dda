//! Creature - request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use pokedex::{CreateCreature, Creature, CreatureType, Sprites, Stats};

use super::validation::validate_types;
use crate::application::{CreatureFilter, SortOrder};

/// Combat statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct StatsBody {
    #[validate(range(min = 1, max = 255))]
    pub hp: u32,
    #[validate(range(min = 1, max = 255))]
    pub attack: u32,
    #[validate(range(min = 1, max = 255))]
    pub defense: u32,
    #[validate(range(min = 1, max = 255))]
    pub speed: u32,
}

/// Sprite references
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SpritesBody {
    pub front_default: String,
    pub back_default: String,
}

/// Create creature request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateCreatureRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[serde(rename = "baseExperience")]
    #[validate(range(min = 1, max = 1000))]
    pub base_experience: u32,
    #[validate(range(min = 1, max = 10000))]
    pub weight: u32,
    #[validate(range(min = 1, max = 100))]
    pub height: u32,
    /// One or two distinct types, e.g. `["Fire", "Flying"]`
    #[validate(length(min = 1, max = 2), custom(function = "validate_types"))]
    pub types: Vec<String>,
    #[validate(nested)]
    pub stats: StatsBody,
    pub sprites: SpritesBody,
}

impl CreateCreatureRequest {
    /// Trim the name so a blank one fails `length(min = 1)`; run before `validate`
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }

    /// Convert a validated request into the registry's creation input
    pub fn into_input(self) -> Result<CreateCreature, String> {
        let types = self
            .types
            .iter()
            .map(|t| t.parse::<CreatureType>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CreateCreature {
            name: self.name,
            base_experience: self.base_experience,
            weight: self.weight,
            height: self.height,
            types,
            stats: self.stats.into(),
            sprites: self.sprites.into(),
        })
    }
}

/// Creature response with computed power
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatureResponse {
    pub id: u64,
    pub name: String,
    pub level: u32,
    #[serde(rename = "baseExperience")]
    pub base_experience: u32,
    pub weight: u32,
    pub height: u32,
    pub types: Vec<String>,
    pub stats: StatsBody,
    pub sprites: SpritesBody,
    /// hp * attack
    pub power: u64,
}

impl From<Creature> for CreatureResponse {
    fn from(creature: Creature) -> Self {
        let power = creature.power();
        Self {
            id: creature.id,
            name: creature.name,
            level: creature.level,
            base_experience: creature.base_experience,
            weight: creature.weight,
            height: creature.height,
            types: creature.types.iter().map(|t| t.to_string()).collect(),
            stats: creature.stats.into(),
            sprites: creature.sprites.into(),
            power,
        }
    }
}

impl From<StatsBody> for Stats {
    fn from(body: StatsBody) -> Self {
        Self {
            hp: body.hp,
            attack: body.attack,
            defense: body.defense,
            speed: body.speed,
        }
    }
}

impl From<Stats> for StatsBody {
    fn from(stats: Stats) -> Self {
        Self {
            hp: stats.hp,
            attack: stats.attack,
            defense: stats.defense,
            speed: stats.speed,
        }
    }
}

impl From<SpritesBody> for Sprites {
    fn from(body: SpritesBody) -> Self {
        Self {
            front_default: body.front_default,
            back_default: body.back_default,
        }
    }
}

impl From<Sprites> for SpritesBody {
    fn from(sprites: Sprites) -> Self {
        Self {
            front_default: sprites.front_default,
            back_default: sprites.back_default,
        }
    }
}

/// Query parameters for listing creatures
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCreaturesQuery {
    /// Keep creatures having this type (case-insensitive)
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Keep creatures whose hit points are at least this value; ignored when not a number
    #[serde(rename = "minLevel")]
    pub min_level: Option<String>,
    /// `level` or `power`, both descending; registry order otherwise
    pub sort: Option<String>,
}

impl ListCreaturesQuery {
    pub fn into_filter(self) -> CreatureFilter {
        CreatureFilter {
            min_hp: self.min_level.as_deref().and_then(|raw| raw.trim().parse().ok()),
            sort: SortOrder::parse(self.sort.as_deref()),
            type_name: self.type_name,
        }
    }
}

/// Query parameters for level-up
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LevelUpQuery {
    /// Levels to gain; anything but a positive integer means 1
    pub levels: Option<String>,
}

impl LevelUpQuery {
    pub fn levels(&self) -> Option<u32> {
        self.levels
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|l| *l > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateCreatureRequest {
        serde_json::from_value(serde_json::json!({
            "name": "eevee",
            "baseExperience": 65,
            "weight": 65,
            "height": 3,
            "types": ["Normal"],
            "stats": { "hp": 55, "attack": 55, "defense": 50, "speed": 55 },
            "sprites": { "front_default": "133.png", "back_default": "133b.png" }
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_request_converts() {
        let request = valid_request();
        assert!(request.validate().is_ok());

        let input = request.into_input().unwrap();
        assert_eq!(input.types, vec![CreatureType::Normal]);
        assert_eq!(input.stats.hp, 55);
        assert_eq!(input.sprites.front_default, "133.png");
    }

    #[test]
    fn test_blank_name_fails_after_normalizing() {
        let mut request = valid_request();
        request.name = "   ".to_string();

        let errors = request.normalized().validate().unwrap_err();
        assert!(errors.errors().contains_key("name"));
    }

    #[test]
    fn test_normalized_name_is_stored_trimmed() {
        let mut request = valid_request();
        request.name = "  eevee ".to_string();

        let request = request.normalized();
        assert!(request.validate().is_ok());
        assert_eq!(request.into_input().unwrap().name, "eevee");
    }

    #[test]
    fn test_response_carries_power_and_lower_case_types() {
        let creature = pokedex::Creature::new(133, valid_request().into_input().unwrap());
        let response = CreatureResponse::from(creature);

        assert_eq!(response.power, 55 * 55);
        assert_eq!(response.level, 1);
        assert_eq!(response.types, vec!["normal"]);
    }

    #[test]
    fn test_list_query_ignores_bad_min_level() {
        let filter = ListCreaturesQuery {
            type_name: Some("fire".to_string()),
            min_level: Some("lots".to_string()),
            sort: Some("power".to_string()),
        }
        .into_filter();

        assert_eq!(filter.min_hp, None);
        assert_eq!(filter.sort, SortOrder::PowerDesc);
        assert_eq!(filter.type_name.as_deref(), Some("fire"));
    }

    #[test]
    fn test_level_up_query_defaults() {
        let parse = |raw: Option<&str>| {
            LevelUpQuery {
                levels: raw.map(str::to_string),
            }
            .levels()
        };
        assert_eq!(parse(Some("3")), Some(3));
        assert_eq!(parse(Some("0")), None);
        assert_eq!(parse(Some("-2")), None);
        assert_eq!(parse(Some("x")), None);
        assert_eq!(parse(None), None);
    }
}
