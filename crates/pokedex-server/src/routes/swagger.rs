//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreateCreatureRequest, CreatureResponse, SpritesBody, StatsBody};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Creature endpoints
        super::creature::list_creatures,
        super::creature::creature_stats,
        super::creature::create_creature,
        super::creature::get_creature,
        super::creature::delete_creature,
        super::creature::level_up_creature,
        // Admin endpoints
        super::admin::admin_level_up_creature,
    ),
    info(
        title = "Pokedex API",
        version = "0.1.0",
        description = "In-memory creature registry with a gated, rate-limited admin level-up.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Pokemon", description = "Creature registry"),
        (name = "Admin", description = "Admin-only operations"),
    ),
    components(
        schemas(
            CreateCreatureRequest,
            CreatureResponse,
            StatsBody,
            SpritesBody,
        )
    ),
)]
pub struct ApiDoc;
