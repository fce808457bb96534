//! Error types for the RBAC engine

use thiserror::Error;

/// RBAC engine errors
///
/// Only the mutation surface produces errors; decision queries never do —
/// an unmatched user, resource, or verb simply yields a deny.
#[derive(Debug, Error)]
pub enum RbacError {
    /// One or more resource patterns failed glob-syntax validation.
    /// Well-formed patterns from the same call are still committed.
    #[error("invalid pattern(s): {0}")]
    InvalidPattern(String),

    /// One or more verbs outside the known vocabulary. Known verbs from the
    /// same call are still committed.
    #[error("unknown verb(s): {0}")]
    UnknownVerb(String),

    /// Role manifest failed to deserialize.
    #[error("manifest parse error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Role manifest carried an unexpected `kind`.
    #[error("unexpected manifest kind: expected {expected}, found {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: String,
    },
}

/// Result type for RBAC operations
pub type Result<T> = std::result::Result<T, RbacError>;
