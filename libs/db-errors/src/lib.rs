//! Shared storage error helpers (SQLSTATE categorization, etc.)
//!
//! Repositories branch on [`StorageErrorKind`] instead of driver error
//! values; everything driver-specific stays behind [`ErrorClassifier`].

/// Failure classes a data-access layer can act on, independent of the
/// backing driver's error representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageErrorKind {
    /// Unique or primary-key constraint violation.
    Duplicate,
    /// The store rejected a value's shape, type or length.
    Malformed,
    /// Anything the classifier does not recognize.
    Other,
}

/// Returns true if the given SQLSTATE / result code represents a unique
/// constraint violation across popular backends (Postgres 23505,
/// SQLite 2067 and 1555, MySQL 1062).
pub fn is_unique_violation_code(code: &str) -> bool {
    matches!(code, "23505" | "2067" | "1555" | "1062")
}

/// Returns true for codes the store uses to reject a value's representation:
/// invalid text representation (Postgres 22P02), string data right
/// truncation (22001), invalid datetime format (22007), MySQL data
/// truncation (1406).
pub fn is_malformed_value_code(code: &str) -> bool {
    matches!(code, "22P02" | "22001" | "22007" | "1406")
}

/// Categorize a raw SQLSTATE / result code.
pub fn classify_code(code: &str) -> StorageErrorKind {
    if is_unique_violation_code(code) {
        StorageErrorKind::Duplicate
    } else if is_malformed_value_code(code) {
        StorageErrorKind::Malformed
    } else {
        StorageErrorKind::Other
    }
}

/// Categorize a driver-level error by its machine-readable code.
/// Drivers that expose no code fall back to [`StorageErrorKind::Other`].
pub fn classify_sqlx_database_error(db: &dyn sqlx::error::DatabaseError) -> StorageErrorKind {
    db.code()
        .map(|c| classify_code(c.as_ref()))
        .unwrap_or(StorageErrorKind::Other)
}

#[cfg(feature = "sea-orm")]
mod orm {
    use super::{classify_sqlx_database_error, StorageErrorKind};
    use sea_orm::{DbErr, RuntimeErr, SqlErr};

    /// Folds driver failures into [`StorageErrorKind`]s. Implementations own
    /// all knowledge of the driver's error representation; repositories only
    /// see the kind.
    pub trait ErrorClassifier: Send + Sync {
        fn classify(&self, err: &DbErr) -> StorageErrorKind;
    }

    /// Default classifier: consults the ORM's portable [`SqlErr`] view
    /// first, then the driver's SQLSTATE / result code.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct SqlStateClassifier;

    impl ErrorClassifier for SqlStateClassifier {
        fn classify(&self, err: &DbErr) -> StorageErrorKind {
            if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                return StorageErrorKind::Duplicate;
            }
            match err {
                DbErr::Conn(RuntimeErr::SqlxError(e))
                | DbErr::Exec(RuntimeErr::SqlxError(e))
                | DbErr::Query(RuntimeErr::SqlxError(e)) => e
                    .as_database_error()
                    .map(classify_sqlx_database_error)
                    .unwrap_or(StorageErrorKind::Other),
                _ => StorageErrorKind::Other,
            }
        }
    }
}

#[cfg(feature = "sea-orm")]
pub use orm::{ErrorClassifier, SqlStateClassifier};
