//! Request Pipeline Stages
//!
//! The stages a mutating request passes through before reaching the registry:
//!
//! `Enricher -> Access Gate -> Rate Limiter -> Latency Injector -> handler`
//!
//! Each stage here is transport-agnostic; the server crate adapts them into
//! axum middleware.

mod access_gate;
mod context;
mod latency;
mod rate_limiter;

pub use access_gate::*;
pub use context::*;
pub use latency::*;
pub use rate_limiter::*;
