//! End-to-end tests for the full holonetd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use holonet_adapter_http_axum::router::{self, App};
use holonet_adapter_http_axum::state::AppState;
use holonet_adapter_storage_sqlite_sqlx::{
    Config, SqlitePeopleRepository, SqlitePlanetRepository, SqliteUserRepository,
    SqliteVehicleRepository,
};
use holonet_app::ports::{PlanetRepository, VehicleRepository};
use holonet_app::services::people_service::PeopleService;
use holonet_app::services::planet_service::PlanetService;
use holonet_app::services::user_service::UserService;
use holonet_app::services::vehicle_service::VehicleService;
use holonet_domain::id::{PersonId, PlanetId};
use holonet_domain::planet::Planet;
use holonet_domain::vehicle::Vehicle;
use serde_json::{Value, json};
use tower::ServiceExt;

/// A fully-wired app plus direct handles on the repositories that have no
/// write endpoint.
struct Harness {
    app: App,
    planets: SqlitePlanetRepository,
    vehicles: SqliteVehicleRepository,
}

impl Harness {
    async fn new() -> Self {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .expect("in-memory database should initialise");
        let pool = db.pool().clone();

        let user_repo = SqliteUserRepository::new(pool.clone());
        let planet_repo = SqlitePlanetRepository::new(pool.clone());
        let people_repo = SqlitePeopleRepository::new(pool.clone());
        let vehicle_repo = SqliteVehicleRepository::new(pool);

        let state = AppState::new(
            UserService::new(user_repo),
            PlanetService::new(planet_repo.clone(), people_repo.clone()),
            PeopleService::new(people_repo.clone(), planet_repo.clone()),
            VehicleService::new(vehicle_repo.clone(), people_repo),
        );

        Self {
            app: router::build(state),
            planets: planet_repo,
            vehicles: vehicle_repo,
        }
    }

    async fn seed_planet(&self, name: &str) -> PlanetId {
        let planet = Planet::builder()
            .name(name)
            .climate("arid")
            .population("200000")
            .build()
            .unwrap();
        self.planets.create(planet).await.unwrap().id
    }

    async fn seed_vehicle(&self, name: &str, pilot: PersonId) -> Value {
        let vehicle = Vehicle::builder()
            .name(name)
            .model("T-47")
            .pilot_id(pilot)
            .build()
            .unwrap();
        serde_json::to_value(self.vehicles.create(vehicle).await.unwrap()).unwrap()
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.send_raw(method, uri, body.map(|json| json.to_string())).await
    }

    /// Send `body` verbatim with a JSON content type, readable or not.
    async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(text) => {
                builder = builder.header("content-type", "application/json");
                Body::from(text)
            }
            None => Body::empty(),
        };
        let resp = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }
}

fn new_user(email: &str) -> Value {
    json!({
        "email": email,
        "password": "hunter2",
        "firts_name": "Leia",
        "second_name": "Organa",
    })
}

// ---------------------------------------------------------------------------
// Service endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let h = Harness::new().await;
    let (status, body) = h.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn should_list_routes_on_sitemap() {
    let h = Harness::new().await;
    let (status, body) = h.get("/").await;

    assert_eq!(status, StatusCode::OK);
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.contains(&json!("/people")));
    assert!(endpoints.contains(&json!("/planets/{id}")));
}

#[tokio::test]
async fn should_return_json_404_for_unknown_route() {
    let h = Harness::new().await;
    let (status, body) = h.get("/starships").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Recurso no encontrado" }));
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_user_and_never_expose_password() {
    let h = Harness::new().await;

    let (status, created) = h
        .send(Method::POST, "/user", Some(new_user("leia@alderaan.org")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["email"], "leia@alderaan.org");
    assert_eq!(created["is_active"], true);
    assert!(created.get("password").is_none());

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = h.get(&format!("/user/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fetched.get("password").is_none());

    let (_, all) = h.get("/user").await;
    for user in all.as_array().unwrap() {
        assert!(user.get("password").is_none());
    }
}

#[tokio::test]
async fn should_reject_user_without_required_fields() {
    let h = Harness::new().await;
    let (status, body) = h
        .send(Method::POST, "/user", Some(json!({ "email": "a@b.c" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Faltan campos obligatorios" }));
}

#[tokio::test]
async fn should_return_500_and_keep_count_when_email_duplicated() {
    let h = Harness::new().await;
    let (status, _) = h
        .send(Method::POST, "/user", Some(new_user("han@falcon.net")))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = h
        .send(Method::POST, "/user", Some(new_user("han@falcon.net")))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("UNIQUE"));

    let (_, all) = h.get("/user").await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_return_404_when_user_missing() {
    let h = Harness::new().await;
    let (status, body) = h.get("/user/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "usuario no encontrado" }));
}

// ---------------------------------------------------------------------------
// Planets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_empty_list_when_no_planets() {
    let h = Harness::new().await;
    let (status, body) = h.get("/planet").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_get_planet_with_opaque_population() {
    let h = Harness::new().await;
    let id = h.seed_planet("Tatooine").await;

    let (status, body) = h.get(&format!("/planets/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": id.get(), "name": "Tatooine", "climate": "arid", "population": "200000" })
    );
}

#[tokio::test]
async fn should_return_404_when_planet_missing() {
    let h = Harness::new().await;
    let (status, body) = h.get("/planets/9").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Planeta no encontrado" }));
}

#[tokio::test]
async fn should_list_residents_of_planet() {
    let h = Harness::new().await;
    let tatooine = h.seed_planet("Tatooine").await;
    let naboo = h.seed_planet("Naboo").await;
    h.send(
        Method::POST,
        "/people",
        Some(json!({ "name": "Luke", "planet_id": tatooine.get() })),
    )
    .await;
    h.send(
        Method::POST,
        "/people",
        Some(json!({ "name": "Padme", "planet_id": naboo.get() })),
    )
    .await;

    let (status, body) = h.get(&format!("/planets/{tatooine}/residents")).await;
    assert_eq!(status, StatusCode::OK);
    let residents = body.as_array().unwrap();
    assert_eq!(residents.len(), 1);
    assert_eq!(residents[0]["name"], "Luke");
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_luke_with_null_optional_fields() {
    let h = Harness::new().await;
    let planet = h.seed_planet("Tatooine").await;

    let (status, body) = h
        .send(
            Method::POST,
            "/people",
            Some(json!({ "name": "Luke", "planet_id": planet.get() })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(
        body,
        json!({
            "id": id,
            "name": "Luke",
            "gender": null,
            "height": null,
            "mass": null,
            "birth_year": null,
            "planet_id": planet.get(),
        })
    );
}

#[tokio::test]
async fn should_reject_person_without_planet() {
    let h = Harness::new().await;
    let (status, body) = h
        .send(Method::POST, "/people", Some(json!({ "name": "Luke" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Faltan campos requeridos" }));
}

#[tokio::test]
async fn should_reject_person_with_dangling_planet() {
    let h = Harness::new().await;
    let (status, body) = h
        .send(
            Method::POST,
            "/people",
            Some(json!({ "name": "Luke", "planet_id": 77 })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Planeta no encontrado" }));

    let (_, all) = h.get("/people").await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn should_return_404_for_missing_person_on_get_put_and_delete() {
    let h = Harness::new().await;

    let (status, body) = h.get("/people/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Personaje no encontrado" }));

    let (status, body) = h
        .send(Method::PUT, "/people/5", Some(json!({ "name": "X" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Personaje no encontrado" }));

    let (status, body) = h.send(Method::DELETE, "/people/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Personaje no encontrada" }));
}

#[tokio::test]
async fn should_return_404_when_updating_missing_person_whatever_the_body() {
    let h = Harness::new().await;

    let (status, body) = h.send_raw(Method::PUT, "/people/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Personaje no encontrado" }));

    let (status, body) = h
        .send_raw(Method::PUT, "/people/5", Some("not json".to_string()))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Personaje no encontrado" }));
}

#[tokio::test]
async fn should_return_400_when_updating_existing_person_with_malformed_body() {
    let h = Harness::new().await;
    let planet = h.seed_planet("Tatooine").await;
    let (_, luke) = h
        .send(
            Method::POST,
            "/people",
            Some(json!({ "name": "Luke", "planet_id": planet.get() })),
        )
        .await;

    let (status, body) = h
        .send_raw(
            Method::PUT,
            &format!("/people/{}", luke["id"]),
            Some("not json".to_string()),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Faltan campos requeridos" }));
}

#[tokio::test]
async fn should_return_json_405_when_verb_not_routed() {
    let h = Harness::new().await;
    let (status, body) = h.send(Method::PUT, "/user", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "error": "Método no permitido" }));
}

#[tokio::test]
async fn should_delete_person_once() {
    let h = Harness::new().await;
    let planet = h.seed_planet("Tatooine").await;
    let (_, luke) = h
        .send(
            Method::POST,
            "/people",
            Some(json!({ "name": "Luke", "planet_id": planet.get() })),
        )
        .await;
    let uri = format!("/people/{}", luke["id"]);

    let (status, body) = h.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "Personaje eliminado" }));

    let (status, body) = h.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Personaje no encontrada" }));

    let (status, _) = h.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_merge_partial_update() {
    let h = Harness::new().await;
    let planet = h.seed_planet("Tatooine").await;
    let (_, luke) = h
        .send(
            Method::POST,
            "/people",
            Some(json!({
                "name": "Luke",
                "gender": "male",
                "height": "172",
                "mass": "77",
                "birth_year": "19BBY",
                "planet_id": planet.get(),
            })),
        )
        .await;
    let uri = format!("/people/{}", luke["id"]);

    let (status, updated) = h
        .send(Method::PUT, &uri, Some(json!({ "name": "Luke Skywalker" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    let mut expected = luke.clone();
    expected["name"] = json!("Luke Skywalker");
    assert_eq!(updated, expected);

    let (_, fetched) = h.get(&uri).await;
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn should_clear_field_when_update_sends_null() {
    let h = Harness::new().await;
    let planet = h.seed_planet("Tatooine").await;
    let (_, luke) = h
        .send(
            Method::POST,
            "/people",
            Some(json!({ "name": "Luke", "mass": "77", "planet_id": planet.get() })),
        )
        .await;
    let uri = format!("/people/{}", luke["id"]);

    let (status, updated) = h
        .send(Method::PUT, &uri, Some(json!({ "mass": null })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["mass"], Value::Null);
    assert_eq!(updated["name"], "Luke");
}

#[tokio::test]
async fn should_reject_update_to_dangling_planet() {
    let h = Harness::new().await;
    let planet = h.seed_planet("Tatooine").await;
    let (_, luke) = h
        .send(
            Method::POST,
            "/people",
            Some(json!({ "name": "Luke", "planet_id": planet.get() })),
        )
        .await;
    let uri = format!("/people/{}", luke["id"]);

    let (status, body) = h
        .send(Method::PUT, &uri, Some(json!({ "planet_id": 404 })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Planeta no encontrado" }));

    let (_, fetched) = h.get(&uri).await;
    assert_eq!(fetched["planet_id"], planet.get());
}

#[tokio::test]
async fn should_treat_trailing_slash_as_same_route() {
    let h = Harness::new().await;
    let planet = h.seed_planet("Tatooine").await;

    let (status, _) = h
        .send(
            Method::POST,
            "/people/",
            Some(json!({ "name": "Luke", "planet_id": planet.get() })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, with_slash) = h.get("/people/").await;
    assert_eq!(status, StatusCode::OK);
    let (_, without_slash) = h.get("/people").await;
    assert_eq!(with_slash, without_slash);
    assert_eq!(with_slash.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_vehicles_of_pilot() {
    let h = Harness::new().await;
    let planet = h.seed_planet("Tatooine").await;
    let (_, luke) = h
        .send(
            Method::POST,
            "/people",
            Some(json!({ "name": "Luke", "planet_id": planet.get() })),
        )
        .await;
    let luke_id = PersonId::new(luke["id"].as_i64().unwrap());
    let speeder = h.seed_vehicle("Snowspeeder", luke_id).await;

    let (status, body) = h.get(&format!("/people/{luke_id}/vehicles")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([speeder]));

    let (status, body) = h.get(&format!("/vehicles/{}", speeder["id"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pilot_id"], luke_id.get());

    let (status, body) = h.get("/vehicle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_unassign_vehicle_when_pilot_deleted() {
    let h = Harness::new().await;
    let planet = h.seed_planet("Tatooine").await;
    let (_, luke) = h
        .send(
            Method::POST,
            "/people",
            Some(json!({ "name": "Luke", "planet_id": planet.get() })),
        )
        .await;
    let luke_id = PersonId::new(luke["id"].as_i64().unwrap());
    let speeder = h.seed_vehicle("Snowspeeder", luke_id).await;

    h.send(Method::DELETE, &format!("/people/{luke_id}"), None)
        .await;

    let (status, body) = h.get(&format!("/vehicles/{}", speeder["id"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pilot_id"], Value::Null);
}

#[tokio::test]
async fn should_return_404_when_vehicle_missing() {
    let h = Harness::new().await;
    let (status, body) = h.get("/vehicles/3").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Vehículo no encontrado" }));
}
