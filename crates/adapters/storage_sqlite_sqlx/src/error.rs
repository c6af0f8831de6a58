//! Storage-specific error type wrapping sqlx errors.

use holonet_domain::error::HolonetError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query, constraint or connection failed. The message is the
    /// database's own.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for HolonetError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
