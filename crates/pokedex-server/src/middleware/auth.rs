//! Admin access gate middleware
//!
//! The credential is read from the `X-Admin-Token` header, falling back to
//! the `admin_token` cookie.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use pokedex::{GateDecision, RequestContext};

use crate::error::ApiError;
use crate::AppState;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";
pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

/// Authentication middleware
/// Denied requests never reach the limiter or the handler
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let credential = admin_credential(request.headers());

    match state.gate.check(credential.as_deref()) {
        GateDecision::Allowed => {
            match request.extensions_mut().get_mut::<RequestContext>() {
                Some(ctx) => ctx.mark_authenticated(),
                None => {
                    let mut ctx = RequestContext::default();
                    ctx.mark_authenticated();
                    request.extensions_mut().insert(ctx);
                }
            }
            Ok(next.run(request).await)
        }
        GateDecision::Denied => {
            if credential.is_none() {
                tracing::warn!(path = %request.uri().path(), "Missing admin credential");
            } else {
                tracing::warn!(path = %request.uri().path(), "Invalid admin credential attempted");
            }
            Err(ApiError::Unauthorized)
        }
    }
}

/// Header first, then cookie
fn admin_credential(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        return Some(token.to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == ADMIN_TOKEN_COOKIE)
        .map(|(_, value)| unquote(value.trim()).to_string())
        .filter(|v| !v.is_empty())
}

/// Cookie values may be wrapped in double quotes
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
