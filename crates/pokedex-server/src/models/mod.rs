//! Request/Response DTOs

mod creature;
mod response;
mod validation;

pub use creature::*;
pub use response::*;
pub use validation::*;
