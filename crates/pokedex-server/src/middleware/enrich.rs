//! Context enrichment middleware and the `Ctx` extractor

use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, OriginalUri, Query, RawPathParams, Request, State},
    http::{request::Parts, HeaderMap, Method},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use pokedex::{enrich, RequestContext};

use crate::AppState;

/// Header carrying the caller's trainer identity
pub const TRAINER_HEADER: &str = "x-trainer";

#[derive(Debug, Default, Deserialize)]
pub struct TrainerQuery {
    pub trainer: Option<String>,
}

/// Resolve the request context and store it in the request extensions.
///
/// Never rejects: unknown ids and missing identities leave the
/// corresponding fields empty.
pub async fn enrich_context(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    params: Option<RawPathParams>,
    query: Option<Query<TrainerQuery>>,
    mut request: Request,
    next: Next,
) -> Response {
    let identity = trainer_identity(
        request.headers(),
        query.and_then(|Query(q)| q.trainer).as_deref(),
    );
    let addressed_id = params.as_ref().and_then(|params| {
        params
            .iter()
            .find(|(key, _)| *key == "id")
            .map(|(_, value)| value.to_string())
    });

    let ctx = enrich(
        state.registry.as_ref(),
        identity.as_deref(),
        addressed_id.as_deref(),
    )
    .await;

    tracing::info!(
        method = %method,
        path = %uri.path(),
        trainer = ctx.trainer(),
        id = addressed_id.as_deref(),
        resolved = ctx.target.is_some(),
        "request"
    );

    request.extensions_mut().insert(ctx);
    next.run(request).await
}

/// Header first, then the `trainer` query parameter
fn trainer_identity(headers: &HeaderMap, query_trainer: Option<&str>) -> Option<String> {
    headers
        .get(TRAINER_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| query_trainer.map(str::trim).filter(|v| !v.is_empty()))
        .map(str::to_string)
}

/// Extractor for the enriched [`RequestContext`].
///
/// Falls back to an empty context on routes the enricher does not wrap.
#[derive(Debug, Clone, Default)]
pub struct Ctx(pub RequestContext);

#[async_trait]
impl<S> FromRequestParts<S> for Ctx
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Ctx(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default()))
    }
}
