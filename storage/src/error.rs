use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

// SQLite extended result codes: 2067 = SQLITE_CONSTRAINT_UNIQUE,
// 1555 = SQLITE_CONSTRAINT_PRIMARYKEY, 787 = SQLITE_CONSTRAINT_FOREIGNKEY.
impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if matches!(e.code().as_deref(), Some("2067") | Some("1555"))
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("787")
        )
    }
}

/// Failures turning a raw record payload into a typed one.
#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("field '{field}' must be a number (got '{value}')")]
    InvalidNumber { field: &'static str, value: String },

    #[error("field '{field}' must be an integer (got '{value}')")]
    InvalidInteger { field: &'static str, value: String },

    #[error("invalid workout time '{date}T{time}' (expected YYYY-MM-DD and HH:MM[:SS])")]
    InvalidWorkoutTime { date: String, time: String },

    #[error("'records' must be an array")]
    RecordsNotAnArray,

    #[error("records[{index}]: {reason}")]
    InvalidBatchElement { index: usize, reason: String },
}
