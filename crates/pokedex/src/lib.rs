//! Pokedex Domain Library
//!
//! Core domain types and interfaces for the Pokedex record service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Creature and its creation input / load record
//!   - `value_objects/`: Immutable value types (CreatureType)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Registry access interface
//!
//! - **Pipeline** (`pipeline/`): Request-processing stages that gate and
//!   instrument mutating requests (context enrichment, access gate,
//!   rate limiting, latency injection)
//!
//! # Usage
//!
//! ```rust,ignore
//! use pokedex::domain::{Creature, CreateCreature};
//! use pokedex::ports::CreatureRepository;
//! ```

pub mod domain;
pub mod pipeline;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CreateCreature, Creature, CreatureRecord, CreatureType, DomainError, LoadError, Sprites,
    Stats, MAX_LEVEL,
};
pub use pipeline::{
    enrich, AccessGate, Admission, FixedWindowLimiter, GateDecision, LatencyInjector,
    RequestContext,
};
pub use ports::CreatureRepository;
