//! Shared application state for axum handlers.

use std::sync::Arc;

use holonet_app::ports::{PeopleRepository, PlanetRepository, UserRepository, VehicleRepository};
use holonet_app::services::people_service::PeopleService;
use holonet_app::services::planet_service::PlanetService;
use holonet_app::services::user_service::UserService;
use holonet_app::services::vehicle_service::VehicleService;

/// Application state shared across all axum handlers.
///
/// Generic over the four repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<UR, PLR, PR, VR> {
    /// User service.
    pub user_service: Arc<UserService<UR>>,
    /// Planet service.
    pub planet_service: Arc<PlanetService<PLR, PR>>,
    /// People service.
    pub people_service: Arc<PeopleService<PR, PLR>>,
    /// Vehicle service.
    pub vehicle_service: Arc<VehicleService<VR, PR>>,
}

impl<UR, PLR, PR, VR> Clone for AppState<UR, PLR, PR, VR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            planet_service: Arc::clone(&self.planet_service),
            people_service: Arc::clone(&self.people_service),
            vehicle_service: Arc::clone(&self.vehicle_service),
        }
    }
}

impl<UR, PLR, PR, VR> AppState<UR, PLR, PR, VR>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        planet_service: PlanetService<PLR, PR>,
        people_service: PeopleService<PR, PLR>,
        vehicle_service: VehicleService<VR, PR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            planet_service: Arc::new(planet_service),
            people_service: Arc::new(people_service),
            vehicle_service: Arc::new(vehicle_service),
        }
    }
}
