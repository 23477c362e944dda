//! Pokedex API Routes
//!
//! - /api/v1/pokemons - creature registry (public)
//! - /api/v1/pokemons/stats - creature counts per type
//! - /api/v1/pokemons/:id/level-up - level-up (public)
//! - /api/v1/admin/pokemons/:id/level-up - level-up behind gate and limiter

pub mod admin;
pub mod creature;
pub mod swagger;
