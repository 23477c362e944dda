//! Rate limiting middleware for the admin level-up route

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use pokedex::Admission;

use crate::error::ApiError;
use crate::AppState;

/// Consumes one unit of the route's budget before the handler runs.
///
/// An admitted request keeps its unit even if the handler then fails.
pub async fn limit_admin_level_up(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match state.admin_level_up_limiter.admit() {
        Admission::Admitted => Ok(next.run(request).await),
        Admission::RateLimited { retry_after } => {
            tracing::warn!(
                path = %request.uri().path(),
                retry_after_ms = retry_after.as_millis() as u64,
                "Admin level-up rate limit exceeded"
            );
            Err(ApiError::RateLimited { retry_after })
        }
    }
}
