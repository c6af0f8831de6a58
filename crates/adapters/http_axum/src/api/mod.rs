//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod people;
#[allow(clippy::missing_errors_doc)]
pub mod planets;
#[allow(clippy::missing_errors_doc)]
pub mod users;
#[allow(clippy::missing_errors_doc)]
pub mod vehicles;

use axum::Router;
use axum::routing::get;

use holonet_app::ports::{PeopleRepository, PlanetRepository, UserRepository, VehicleRepository};

use crate::state::AppState;

/// Every API route, as advertised by the sitemap.
pub const ENDPOINTS: &[&str] = &[
    "/user",
    "/user/{id}",
    "/people",
    "/people/{id}",
    "/people/{id}/vehicles",
    "/planet",
    "/planets/{id}",
    "/planets/{id}/residents",
    "/vehicle",
    "/vehicles/{id}",
];

/// Build the API sub-router.
pub fn routes<UR, PLR, PR, VR>() -> Router<AppState<UR, PLR, PR, VR>>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    Router::new()
        // Users
        .route(
            "/user",
            get(users::list::<UR, PLR, PR, VR>).post(users::create::<UR, PLR, PR, VR>),
        )
        .route("/user/{id}", get(users::get::<UR, PLR, PR, VR>))
        // People
        .route(
            "/people",
            get(people::list::<UR, PLR, PR, VR>).post(people::create::<UR, PLR, PR, VR>),
        )
        .route(
            "/people/{id}",
            get(people::get::<UR, PLR, PR, VR>)
                .put(people::update::<UR, PLR, PR, VR>)
                .delete(people::delete::<UR, PLR, PR, VR>),
        )
        .route(
            "/people/{id}/vehicles",
            get(people::vehicles::<UR, PLR, PR, VR>),
        )
        // Planets
        .route("/planet", get(planets::list::<UR, PLR, PR, VR>))
        .route("/planets/{id}", get(planets::get::<UR, PLR, PR, VR>))
        .route(
            "/planets/{id}/residents",
            get(planets::residents::<UR, PLR, PR, VR>),
        )
        // Vehicles
        .route("/vehicle", get(vehicles::list::<UR, PLR, PR, VR>))
        .route("/vehicles/{id}", get(vehicles::get::<UR, PLR, PR, VR>))
}
