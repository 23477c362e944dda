//! Request pipeline glue
//!
//! Wraps the pure stages from `pokedex::pipeline` as axum middleware:
//!
//! - `enrich` - builds the [`pokedex::RequestContext`] (always first)
//! - `auth` - admin access gate
//! - `rate_limit` - fixed window limiter for the admin level-up route
//! - `fatigue` - marker-triggered latency injection

pub mod auth;
pub mod enrich;
pub mod fatigue;
pub mod rate_limit;

pub use auth::require_admin;
pub use enrich::{enrich_context, Ctx};
pub use fatigue::inject_fatigue;
pub use rate_limit::limit_admin_level_up;
