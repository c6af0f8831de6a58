//! HTTP error response mapping.
//!
//! Every handler reports failures through [`ApiError`]. The literal messages
//! differ per endpoint, so each handler supplies a [`Messages`] table and
//! maps domain errors with [`ApiError::guard`].

use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use holonet_domain::error::{HolonetError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Client-facing messages of one endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    /// Sent with `404` when the addressed row does not exist.
    pub not_found: &'static str,
    /// Sent with `400` when a required field is missing or the body is unreadable.
    pub invalid: &'static str,
}

impl Messages {
    /// Table for an endpoint that reads no body. Only the not-found text is
    /// endpoint-specific.
    #[must_use]
    pub const fn read_only(not_found: &'static str) -> Self {
        Self {
            not_found,
            invalid: "Solicitud inválida",
        }
    }
}

/// An error answered as `{"error": message}` with the given status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Build an error from an explicit status and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Response status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Client-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Translate a domain error using the endpoint's message table.
    ///
    /// Storage failures keep the database's own message and are answered
    /// with `500`; the write they belonged to has already been rolled back.
    pub fn from_domain(err: HolonetError, messages: &Messages) -> Self {
        match err {
            HolonetError::Validation(ValidationError::UnknownReference { entity, id }) => {
                tracing::debug!(entity, id, "dangling reference");
                Self::new(StatusCode::BAD_REQUEST, reference_message(entity))
            }
            HolonetError::Validation(err) => {
                tracing::debug!(error = %err, "validation failed");
                Self::new(StatusCode::BAD_REQUEST, messages.invalid)
            }
            HolonetError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, messages.not_found),
            HolonetError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }

    /// `map_err` adapter over [`ApiError::from_domain`].
    pub fn guard(messages: &'static Messages) -> impl Fn(HolonetError) -> Self {
        move |err| Self::from_domain(err, messages)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

fn reference_message(entity: &str) -> &'static str {
    match entity {
        "Planet" => "Planeta no encontrado",
        "Person" => "Personaje no encontrado",
        _ => "Referencia no encontrada",
    }
}

/// Unwrap a JSON body, answering `400` with the endpoint's message when it
/// is missing, malformed, or of the wrong shape.
///
/// # Errors
///
/// Returns an [`ApiError`] with [`StatusCode::BAD_REQUEST`].
pub fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    messages: &Messages,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected request body");
            Err(ApiError::new(StatusCode::BAD_REQUEST, messages.invalid))
        }
    }
}

/// Unwrap an integer path id. A non-integer id addresses nothing, so it is
/// answered like a missing row.
///
/// # Errors
///
/// Returns an [`ApiError`] with [`StatusCode::NOT_FOUND`].
pub fn path_id<T: From<i64>>(
    path: Result<Path<i64>, PathRejection>,
    messages: &Messages,
) -> Result<T, ApiError> {
    match path {
        Ok(Path(raw)) => Ok(T::from(raw)),
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected path id");
            Err(ApiError::new(StatusCode::NOT_FOUND, messages.not_found))
        }
    }
}
