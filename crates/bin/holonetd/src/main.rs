//! # holonetd — holonet daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`holonet.toml`, env vars)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use holonet_adapter_http_axum::state::AppState;
use holonet_adapter_storage_sqlite_sqlx::{
    SqlitePeopleRepository, SqlitePlanetRepository, SqliteUserRepository,
    SqliteVehicleRepository,
};
use holonet_app::services::people_service::PeopleService;
use holonet_app::services::planet_service::PlanetService;
use holonet_app::services::user_service::UserService;
use holonet_app::services::vehicle_service::VehicleService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = holonet_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let user_repo = SqliteUserRepository::new(pool.clone());
    let planet_repo = SqlitePlanetRepository::new(pool.clone());
    let people_repo = SqlitePeopleRepository::new(pool.clone());
    let vehicle_repo = SqliteVehicleRepository::new(pool);

    // Services
    let user_service = UserService::new(user_repo);
    let planet_service = PlanetService::new(planet_repo.clone(), people_repo.clone());
    let people_service = PeopleService::new(people_repo.clone(), planet_repo);
    let vehicle_service = VehicleService::new(vehicle_repo, people_repo);

    // HTTP
    let state = AppState::new(user_service, planet_service, people_service, vehicle_service);
    let app = holonet_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, database = config.database_url(), "holonetd listening");

    axum::serve(
        listener,
        axum::ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("holonetd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
