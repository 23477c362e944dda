//! Request Context - typed per-request values shared between stages
//!
//! Built once by the enricher at request start; later stages only touch
//! the fields they own (the access gate sets `admin_authenticated`).

use crate::domain::Creature;
use crate::ports::CreatureRepository;

/// Per-request context. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Caller-supplied trainer identity, empty when absent
    pub trainer_id: String,
    /// Snapshot of the creature addressed by the request path, if it resolved
    pub target: Option<Creature>,
    /// Set by the access gate once the admin credential matched
    pub admin_authenticated: bool,
}

impl RequestContext {
    pub fn trainer(&self) -> Option<&str> {
        if self.trainer_id.is_empty() {
            None
        } else {
            Some(&self.trainer_id)
        }
    }

    pub fn mark_authenticated(&mut self) {
        self.admin_authenticated = true;
    }
}

/// Build the context for one request.
///
/// Best effort: a malformed or unknown `addressed_id` leaves `target` empty
/// instead of failing.
pub async fn enrich<R>(
    registry: &R,
    identity_hint: Option<&str>,
    addressed_id: Option<&str>,
) -> RequestContext
where
    R: CreatureRepository + ?Sized,
{
    let trainer_id = identity_hint.map(str::trim).unwrap_or_default().to_string();

    let target = match addressed_id.and_then(|raw| raw.trim().parse::<u64>().ok()) {
        Some(id) => registry.get(id).await.ok(),
        None => None,
    };

    RequestContext {
        trainer_id,
        target,
        admin_authenticated: false,
    }
}
