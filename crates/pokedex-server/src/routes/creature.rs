//! Creature Routes - registry CRUD and level-up
//!
//! HTTP handlers that delegate to CreatureService for business logic.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use pokedex::RequestContext;

use crate::error::ApiError;
use crate::middleware::Ctx;
use crate::models::{
    validation_messages, ApiResponse, CreateCreatureRequest, CreatureResponse, LevelUpQuery,
    ListCreaturesQuery,
};
use crate::AppState;

/// Parse the `:id` path segment
pub(crate) fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// List creatures
#[utoipa::path(
    get,
    path = "/api/v1/pokemons",
    params(ListCreaturesQuery),
    responses(
        (status = 200, description = "Creatures matching the filter", body = Vec<CreatureResponse>)
    ),
    tag = "Pokemon"
)]
pub async fn list_creatures(
    State(state): State<AppState>,
    Query(query): Query<ListCreaturesQuery>,
) -> Json<ApiResponse<Vec<CreatureResponse>>> {
    let creatures = state.creature_service.list(&query.into_filter()).await;

    Json(ApiResponse::ok(
        creatures.into_iter().map(CreatureResponse::from).collect(),
    ))
}

/// Creature counts per type
#[utoipa::path(
    get,
    path = "/api/v1/pokemons/stats",
    responses(
        (status = 200, description = "Number of creatures per lower-case type name", body = BTreeMap<String, usize>)
    ),
    tag = "Pokemon"
)]
pub async fn creature_stats(
    State(state): State<AppState>,
) -> Json<ApiResponse<BTreeMap<String, usize>>> {
    Json(ApiResponse::ok(state.creature_service.type_counts().await))
}

/// Create new creature
#[utoipa::path(
    post,
    path = "/api/v1/pokemons",
    request_body = CreateCreatureRequest,
    responses(
        (status = 201, description = "Creature created", body = CreatureResponse),
        (status = 400, description = "Malformed body or validation failure")
    ),
    tag = "Pokemon"
)]
pub async fn create_creature(
    State(state): State<AppState>,
    payload: Result<Json<CreateCreatureRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<CreatureResponse>>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let payload = payload.normalized();

    payload
        .validate()
        .map_err(|errors| ApiError::Validation(validation_messages(&errors)))?;
    let input = payload
        .into_input()
        .map_err(|e| ApiError::Validation(vec![e]))?;

    let creature = state.creature_service.create(input).await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CreatureResponse::from(creature))),
    ))
}

/// Get creature by ID
#[utoipa::path(
    get,
    path = "/api/v1/pokemons/{id}",
    params(
        ("id" = u64, Path, description = "Creature ID")
    ),
    responses(
        (status = 200, description = "Creature found", body = CreatureResponse),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Creature not found")
    ),
    tag = "Pokemon"
)]
pub async fn get_creature(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CreatureResponse>>, ApiError> {
    let id = parse_id(&id)?;
    let creature = state.creature_service.get(id).await?;

    Ok(Json(ApiResponse::ok(CreatureResponse::from(creature))))
}

/// Delete creature
#[utoipa::path(
    delete,
    path = "/api/v1/pokemons/{id}",
    params(
        ("id" = u64, Path, description = "Creature ID")
    ),
    responses(
        (status = 200, description = "Creature deleted"),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Creature not found")
    ),
    tag = "Pokemon"
)]
pub async fn delete_creature(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let id = parse_id(&id)?;
    state.creature_service.delete(id).await?;

    Ok(Json(ApiResponse::ok("Pokemon deleted.".to_string())))
}

/// Level up creature
#[utoipa::path(
    post,
    path = "/api/v1/pokemons/{id}/level-up",
    params(
        ("id" = u64, Path, description = "Creature ID"),
        LevelUpQuery
    ),
    responses(
        (status = 200, description = "Creature after level-up", body = CreatureResponse),
        (status = 400, description = "Invalid ID or maximum level reached"),
        (status = 404, description = "Creature not found")
    ),
    tag = "Pokemon"
)]
pub async fn level_up_creature(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    Path(id): Path<String>,
    Query(query): Query<LevelUpQuery>,
) -> Result<Json<ApiResponse<CreatureResponse>>, ApiError> {
    apply_level_up(&state, &ctx, &id, &query).await
}

/// Shared by the public and admin level-up routes
pub(crate) async fn apply_level_up(
    state: &AppState,
    ctx: &RequestContext,
    raw_id: &str,
    query: &LevelUpQuery,
) -> Result<Json<ApiResponse<CreatureResponse>>, ApiError> {
    let id = parse_id(raw_id)?;

    if let Some(target) = &ctx.target {
        tracing::debug!(
            trainer = ctx.trainer(),
            admin = ctx.admin_authenticated,
            "Leveling up {} from level {}",
            target.name,
            target.level
        );
    }

    let creature = state.creature_service.level_up(id, query.levels()).await?;

    Ok(Json(ApiResponse::ok(CreatureResponse::from(creature))))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pokemons", get(list_creatures).post(create_creature))
        .route("/pokemons/stats", get(creature_stats))
        .route("/pokemons/:id", get(get_creature).delete(delete_creature))
        .route("/pokemons/:id/level-up", post(level_up_creature))
}
