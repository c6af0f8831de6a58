//! JSON REST handlers for people.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer, Serialize};

use holonet_app::ports::{PeopleRepository, PlanetRepository, UserRepository, VehicleRepository};
use holonet_domain::id::{PersonId, PlanetId};
use holonet_domain::people::{Person, PersonChanges};
use holonet_domain::vehicle::Vehicle;

use crate::error::{ApiError, Messages, json_body, path_id};
use crate::state::AppState;

static MESSAGES: Messages = Messages {
    not_found: "Personaje no encontrado",
    invalid: "Faltan campos requeridos",
};

static DELETE_MESSAGES: Messages = Messages {
    not_found: "Personaje no encontrada",
    invalid: "Faltan campos requeridos",
};

/// Request body for creating a person. `name` and `planet_id` are required.
#[derive(Deserialize)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub birth_year: Option<String>,
    pub planet_id: Option<i64>,
}

/// Request body for a partial update.
///
/// An absent key keeps the stored value; `null` clears an optional column.
#[derive(Deserialize)]
pub struct UpdatePersonRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub height: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub mass: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub birth_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub planet_id: Option<Option<i64>>,
}

impl From<UpdatePersonRequest> for PersonChanges {
    fn from(req: UpdatePersonRequest) -> Self {
        Self {
            name: req.name,
            gender: req.gender,
            height: req.height,
            mass: req.mass,
            birth_year: req.birth_year,
            planet_id: req.planet_id.map(|id| id.map(PlanetId::new)),
        }
    }
}

/// Distinguish a present `null` (`Some(None)`) from an absent key (`None`,
/// via `#[serde(default)]`).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Body confirming a deletion.
#[derive(Serialize)]
pub struct Deleted {
    pub msg: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Person>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Person>),
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
    Created(Json<Person>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<Deleted>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the vehicles-of-person endpoint.
pub enum VehiclesResponse {
    Ok(Json<Vec<Vehicle>>),
}

impl IntoResponse for VehiclesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /people`
pub async fn list<UR, PLR, PR, VR>(
    State(state): State<AppState<UR, PLR, PR, VR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let people = state
        .people_service
        .list_people()
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(ListResponse::Ok(Json(people)))
}

/// `GET /people/:id`
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
    let person_id: PersonId = path_id(id, &MESSAGES)?;
    let person = state
        .people_service
        .get_person(person_id)
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(GetResponse::Ok(Json(person)))
}

/// `POST /people`
pub async fn create<UR, PLR, PR, VR>(
    State(state): State<AppState<UR, PLR, PR, VR>>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let req = json_body(payload, &MESSAGES)?;

    let mut builder = Person::builder().name(req.name.unwrap_or_default());
    if let Some(gender) = req.gender {
        builder = builder.gender(gender);
    }
    if let Some(height) = req.height {
        builder = builder.height(height);
    }
    if let Some(mass) = req.mass {
        builder = builder.mass(mass);
    }
    if let Some(birth_year) = req.birth_year {
        builder = builder.birth_year(birth_year);
    }
    if let Some(planet_id) = req.planet_id {
        builder = builder.planet_id(PlanetId::new(planet_id));
    }

    let person = builder.build().map_err(ApiError::guard(&MESSAGES))?;
    let created = state
        .people_service
        .create_person(person)
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /people/:id`
///
/// An unknown id answers `404` whatever the body holds.
pub async fn update<UR, PLR, PR, VR>(
    State(state): State<AppState<UR, PLR, PR, VR>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdatePersonRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let person_id: PersonId = path_id(id, &MESSAGES)?;
    state
        .people_service
        .get_person(person_id)
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    let req = json_body(payload, &MESSAGES)?;

    let updated = state
        .people_service
        .update_person(person_id, req.into())
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /people/:id`
pub async fn delete<UR, PLR, PR, VR>(
    State(state): State<AppState<UR, PLR, PR, VR>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let person_id: PersonId = path_id(id, &DELETE_MESSAGES)?;
    state
        .people_service
        .delete_person(person_id)
        .await
        .map_err(ApiError::guard(&DELETE_MESSAGES))?;
    Ok(DeleteResponse::Ok(Json(Deleted {
        msg: "Personaje eliminado",
    })))
}

/// `GET /people/:id/vehicles`
pub async fn vehicles<UR, PLR, PR, VR>(
    State(state): State<AppState<UR, PLR, PR, VR>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<VehiclesResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let person_id: PersonId = path_id(id, &MESSAGES)?;
    let vehicles = state
        .vehicle_service
        .vehicles_of(person_id)
        .await
        .map_err(ApiError::guard(&MESSAGES))?;
    Ok(VehiclesResponse::Ok(Json(vehicles)))
}
