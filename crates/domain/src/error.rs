//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HolonetError`] via `#[from]` or an explicit `From` impl.

/// Top-level error shared by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum HolonetError {
    /// Input failed a domain invariant.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A lookup by id found nothing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed (constraint violation, connectivity, …).
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent, empty, or zero.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A foreign key points at a row that does not exist.
    #[error("{entity} {id} does not exist")]
    UnknownReference { entity: &'static str, id: i64 },
}

/// Raised when an entity cannot be found by id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
