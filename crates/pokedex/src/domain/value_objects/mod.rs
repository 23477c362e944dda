//! Value Objects

mod creature_type;

pub use creature_type::*;
