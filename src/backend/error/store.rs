/**
 * Store Errors
 *
 * Outcome of a failed database call, classified once at the store boundary so
 * callers match on a variant instead of inspecting driver error codes.
 */

use thiserror::Error;

/// Database errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write collided with a unique index (e.g. an email already in use)
    #[error("unique constraint violated")]
    UniqueViolation,

    /// Any other database failure
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Self::UniqueViolation,
            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_errors_are_not_unique_violations() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));

        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::Database(_)));
    }
}
