//! Error types for the binding layer.
//!
//! Registration and dispatch are infallible by contract (best-effort,
//! fire-and-forget); only the snapshot path can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
