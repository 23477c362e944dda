//! Latency injection middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppState;

/// Marker header; only the exact value `true` triggers a stall
pub const FATIGUE_HEADER: &str = "x-server-fatigue";

pub async fn inject_fatigue(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let marked = request
        .headers()
        .get(FATIGUE_HEADER)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|v| v == "true");

    if state.fatigue.stall(marked).await {
        tracing::debug!(
            delay_ms = state.fatigue.delay().as_millis() as u64,
            "Injected server fatigue"
        );
    }
    next.run(request).await
}
