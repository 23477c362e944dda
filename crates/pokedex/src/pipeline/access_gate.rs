//! Access Gate - static shared-secret check

/// Outcome of [`AccessGate::check`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allowed,
    Denied,
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allowed)
    }
}

/// Compares a presented credential with one fixed secret.
/// No hashing, no expiry, no per-identity state.
#[derive(Debug, Clone)]
pub struct AccessGate {
    secret: String,
}

impl AccessGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Missing and empty credentials are always denied.
    pub fn check(&self, credential: Option<&str>) -> GateDecision {
        match credential {
            Some(presented) if !presented.is_empty() && presented == self.secret => {
                GateDecision::Allowed
            }
            _ => GateDecision::Denied,
        }
    }
}
