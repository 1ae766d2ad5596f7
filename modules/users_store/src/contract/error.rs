use thiserror::Error;

/// Underlying cause attached for diagnostics; kept type-erased so the
/// contract does not leak any particular driver's error representation.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Stable failure taxonomy for the users store.
///
/// Callers branch on the variant; whatever the driver reported rides along
/// as `source` and is never swallowed.
#[derive(Debug, Error)]
pub enum UsersStoreError {
    /// A required field is missing, or the store rejected a value's shape,
    /// type or length.
    #[error("malformed user entity: {reason}")]
    MalformedEntity {
        reason: String,
        #[source]
        source: Option<Cause>,
    },

    /// Uniqueness constraint violated (duplicate id or email).
    #[error("user with a duplicate id or email already exists")]
    Conflict {
        #[source]
        source: Option<Cause>,
    },

    /// No user row with the given id.
    #[error("user '{id}' not found")]
    NotFound { id: String },

    /// Metadata could not be encoded or decoded.
    #[error("user metadata serialization failed")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// A recognized filter key carried a value of the wrong shape.
    #[error("invalid '{field}' filter: expected {expected}")]
    InvalidFilter {
        field: String,
        expected: &'static str,
    },

    /// Any other storage-layer failure, wrapping the original cause.
    #[error("{op} failed")]
    Storage {
        op: &'static str,
        #[source]
        source: Cause,
    },
}

impl UsersStoreError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedEntity {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn malformed_by(reason: impl Into<String>, source: impl Into<Cause>) -> Self {
        Self::MalformedEntity {
            reason: reason.into(),
            source: Some(source.into()),
        }
    }

    pub fn conflict(source: impl Into<Cause>) -> Self {
        Self::Conflict {
            source: Some(source.into()),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn serialization(source: serde_json::Error) -> Self {
        Self::Serialization { source }
    }

    pub fn invalid_filter(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidFilter {
            field: field.into(),
            expected,
        }
    }

    pub fn storage(op: &'static str, source: impl Into<Cause>) -> Self {
        Self::Storage {
            op,
            source: source.into(),
        }
    }
}
