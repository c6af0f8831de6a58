//! Commit-or-rollback handling shared by every write.

use sqlx::{Sqlite, Transaction};

use crate::error::StorageError;

/// Commit `tx` if the write succeeded, otherwise roll it back and return
/// the write's error.
///
/// A failed rollback is logged; the caller still sees the write's error.
pub(crate) async fn settle<T>(
    tx: Transaction<'static, Sqlite>,
    outcome: Result<T, sqlx::Error>,
) -> Result<T, StorageError> {
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            tracing::warn!(error = %err, "write failed, rolling back");
            Err(write_error(err, tx.rollback().await))
        }
    }
}

fn write_error(err: sqlx::Error, rollback: Result<(), sqlx::Error>) -> StorageError {
    if let Err(rollback_err) = rollback {
        tracing::error!(error = %rollback_err, "rollback failed");
    }
    err.into()
}
