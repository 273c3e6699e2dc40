use thiserror::Error;

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document exists for the id. `find_by_id` reports this as `None`;
    /// only operations that need an existing document (update) raise it.
    #[error("{collection} document not found: {id}")]
    NotFound { collection: &'static str, id: String },

    #[error("invalid identifier {0:?}: expected 24 hexadecimal characters")]
    InvalidIdentifier(String),

    /// A stored document lacks a required member. Points at corrupted data or
    /// a schema mismatch, never at bad caller input.
    #[error("{collection} document is missing required field `{field}`")]
    MissingField {
        collection: &'static str,
        field: String,
    },

    #[error("no update data provided")]
    EmptyUpdate,

    #[error("malformed {collection} document: {reason}")]
    Malformed {
        collection: &'static str,
        reason: String,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;
