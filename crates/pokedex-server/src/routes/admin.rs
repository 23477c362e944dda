//! Admin Routes - level-up behind the access gate and rate limiter

use axum::{
    extract::{Path, Query, State},
    routing::post,
    Json, Router,
};

use crate::error::ApiError;
use crate::middleware::Ctx;
use crate::models::{ApiResponse, CreatureResponse, LevelUpQuery};
use crate::AppState;

use super::creature::apply_level_up;

/// Level up creature (admin)
#[utoipa::path(
    post,
    path = "/api/v1/admin/pokemons/{id}/level-up",
    params(
        ("id" = u64, Path, description = "Creature ID"),
        ("X-Admin-Token" = Option<String>, Header, description = "Admin secret; the admin_token cookie is accepted too"),
        LevelUpQuery
    ),
    responses(
        (status = 200, description = "Creature after level-up", body = CreatureResponse),
        (status = 400, description = "Invalid ID or maximum level reached"),
        (status = 401, description = "Admin credential missing or invalid"),
        (status = 404, description = "Creature not found"),
        (status = 429, description = "Rate limit exceeded")
    ),
    tag = "Admin"
)]
pub async fn admin_level_up_creature(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    Path(id): Path<String>,
    Query(query): Query<LevelUpQuery>,
) -> Result<Json<ApiResponse<CreatureResponse>>, ApiError> {
    tracing::info!(
        trainer = ctx.trainer(),
        id = %id,
        "Admin level-up"
    );
    apply_level_up(&state, &ctx, &id, &query).await
}

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/pokemons/:id/level-up", post(admin_level_up_creature))
}
