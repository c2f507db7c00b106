//! Error types for binderwire.

use thiserror::Error;

/// Main error type for all wire-writer operations.
#[derive(Debug, Error)]
pub enum WireError {
    /// I/O error from an I/O-backed binder implementation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport error (transaction preparation or delivery failed).
    #[error("transport error: {0}")]
    Transport(String),

    /// Parcel serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The writer has been closed; no further transactions can be sent.
    #[error("writer is shut down")]
    Shutdown,
}

/// Result type alias using WireError.
pub type Result<T> = std::result::Result<T, WireError>;
