//! Domain Errors
//!
//! Error types for registry operations and startup loading.

use std::path::PathBuf;

use thiserror::Error;

/// Per-request domain errors. Always recoverable by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Creature not found: {id}")]
    NotFound { id: u64 },

    #[error("Creature {id} is already at the maximum level ({level})")]
    MaxLevelReached { id: u64, level: u32 },
}

impl DomainError {
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }
}

/// Startup ingestion errors. Fatal: the registry cannot serve without its initial state.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read creature data from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse creature data from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid creature record {id}: {reason}")]
    InvalidRecord { id: u64, reason: String },
}
