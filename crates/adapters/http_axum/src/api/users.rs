//! JSON REST handlers for users.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use holonet_app::ports::{PeopleRepository, PlanetRepository, UserRepository, VehicleRepository};
use holonet_domain::id::UserId;
use holonet_domain::user::User;

use crate::error::{ApiError, Messages, json_body, path_id};
use crate::state::AppState;

static MESSAGES: Messages = Messages {
    not_found: "usuario no encontrado",
    invalid: "Faltan campos obligatorios",
};

/// Request body for creating a user.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub firts_name: Option<String>,
    pub second_name: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<User>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /user`
pub async fn list<UR, PLR, PR, VR>(
    State(state): State<AppState<UR, PLR, PR, VR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let users = state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /user/:id`
pub async fn get<UR, PLR, PR, VR>(
    State(state): State<AppState<UR, PLR, PR, VR>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let user_id: UserId = path_id(id, &MESSAGES)?;
    let user = state
        .user_service
        .get_user(user_id)
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /user`
///
/// `email`, `password`, `firts_name` and `second_name` are required;
/// `is_active` defaults to `true`. A duplicate email is a storage failure.
pub async fn create<UR, PLR, PR, VR>(
    State(state): State<AppState<UR, PLR, PR, VR>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let req = json_body(payload, &MESSAGES)?;

    let mut builder = User::builder()
        .email(req.email.unwrap_or_default())
        .password(req.password.unwrap_or_default())
        .firts_name(req.firts_name.unwrap_or_default())
        .second_name(req.second_name.unwrap_or_default());
    if let Some(is_active) = req.is_active {
        builder = builder.is_active(is_active);
    }

    let user = builder.build().map_err(ApiError::guard(&MESSAGES))?;
    let created = state
        .user_service
        .create_user(user)
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(CreateResponse::Created(Json(created)))
}
