//! Pokedex API Server
//!
//! In-memory creature registry served over HTTP, with a request pipeline of
//! context enrichment, admin gating, rate limiting and latency injection.

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pokedex::{AccessGate, FixedWindowLimiter, LatencyInjector};

pub mod adapters;
pub mod application;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

use adapters::InMemoryCreatureRegistry;
use application::CreatureService;
use config::ServerConfig;

/// Type alias for the application service with the concrete registry
pub type AppCreatureService = CreatureService<InMemoryCreatureRegistry>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub creature_service: Arc<AppCreatureService>,
    /// Same registry the service wraps; the enricher reads from it directly
    pub registry: Arc<InMemoryCreatureRegistry>,
    pub gate: Arc<AccessGate>,
    pub admin_level_up_limiter: Arc<FixedWindowLimiter>,
    pub fatigue: LatencyInjector,
}

impl AppState {
    pub fn new(config: &ServerConfig, registry: Arc<InMemoryCreatureRegistry>) -> Self {
        Self {
            creature_service: Arc::new(CreatureService::new(registry.clone())),
            registry,
            gate: Arc::new(AccessGate::new(config.admin_secret.clone())),
            admin_level_up_limiter: Arc::new(FixedWindowLimiter::new(
                config.rate_limit_max,
                config.rate_limit_window,
            )),
            fatigue: LatencyInjector::new(config.fatigue_delay),
        }
    }
}

#[derive(Serialize)]
struct Pong {
    message: String,
}

async fn ping() -> Json<Pong> {
    Json(Pong {
        message: "pong".to_string(),
    })
}

/// Build the full router.
///
/// Stage order per request: enrich, then (admin only) gate and limiter,
/// then fatigue, then the handler. `/ping` only passes the fatigue stage.
pub fn build_router(state: AppState) -> Router {
    // Layers added later run first.
    let public_routes = routes::creature::router()
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::inject_fatigue,
        ))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::enrich_context,
        ));

    let admin_routes = routes::admin::router()
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::inject_fatigue,
        ))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::limit_admin_level_up,
        ))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_admin,
        ))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::enrich_context,
        ));

    let ping_routes = Router::new()
        .route("/ping", get(ping))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::inject_fatigue,
        ));

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(ping_routes)
        .nest("/api/v1", public_routes.merge(admin_routes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
