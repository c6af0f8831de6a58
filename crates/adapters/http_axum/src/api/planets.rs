//! JSON REST handlers for planets.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use holonet_app::ports::{PeopleRepository, PlanetRepository, UserRepository, VehicleRepository};
use holonet_domain::id::PlanetId;
use holonet_domain::people::Person;
use holonet_domain::planet::Planet;

use crate::error::{ApiError, Messages, path_id};
use crate::state::AppState;

static MESSAGES: Messages = Messages::read_only("Planeta no encontrado");

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Planet>>),
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
    Ok(Json<Planet>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the residents endpoint.
pub enum ResidentsResponse {
    Ok(Json<Vec<Person>>),
}

impl IntoResponse for ResidentsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /planet`
pub async fn list<UR, PLR, PR, VR>(
    State(state): State<AppState<UR, PLR, PR, VR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let planets = state
        .planet_service
        .list_planets()
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(ListResponse::Ok(Json(planets)))
}

/// `GET /planets/:id`
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
    let planet_id: PlanetId = path_id(id, &MESSAGES)?;
    let planet = state
        .planet_service
        .get_planet(planet_id)
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(GetResponse::Ok(Json(planet)))
}

/// `GET /planets/:id/residents`
pub async fn residents<UR, PLR, PR, VR>(
    State(state): State<AppState<UR, PLR, PR, VR>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<ResidentsResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let planet_id: PlanetId = path_id(id, &MESSAGES)?;
    let people = state
        .planet_service
        .residents(planet_id)
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(ResidentsResponse::Ok(Json(people)))
}
