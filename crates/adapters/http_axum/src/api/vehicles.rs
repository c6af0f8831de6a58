//! JSON REST handlers for vehicles.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use holonet_app::ports::{PeopleRepository, PlanetRepository, UserRepository, VehicleRepository};
use holonet_domain::id::VehicleId;
use holonet_domain::vehicle::Vehicle;

use crate::error::{ApiError, Messages, path_id};
use crate::state::AppState;

static MESSAGES: Messages = Messages::read_only("Vehículo no encontrado");

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Vehicle>>),
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
    Ok(Json<Vehicle>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /vehicle`
pub async fn list<UR, PLR, PR, VR>(
    State(state): State<AppState<UR, PLR, PR, VR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let vehicles = state
        .vehicle_service
        .list_vehicles()
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(ListResponse::Ok(Json(vehicles)))
}

/// `GET /vehicles/:id`
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
    let vehicle_id: VehicleId = path_id(id, &MESSAGES)?;
    let vehicle = state
        .vehicle_service
        .get_vehicle(vehicle_id)
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(GetResponse::Ok(Json(vehicle)))
}
