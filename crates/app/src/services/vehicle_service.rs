//! Vehicle service — use-cases for vehicles and their pilots.

use holonet_domain::error::{HolonetError, NotFoundError, ValidationError};
use holonet_domain::id::{PersonId, VehicleId};
use holonet_domain::people::Person;
use holonet_domain::vehicle::{NewVehicle, Vehicle};

use crate::ports::{PeopleRepository, VehicleRepository};

/// Application service for vehicles.
pub struct VehicleService<V, P> {
    vehicles: V,
    people: P,
}

impl<V: VehicleRepository, P: PeopleRepository> VehicleService<V, P> {
    /// Create a new service; `people` is used to check and resolve pilots.
    pub fn new(vehicles: V, people: P) -> Self {
        Self { vehicles, people }
    }

    /// Create a new vehicle after validating its name and pilot.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::Validation`] if `name` is empty or `pilot_id`
    /// does not reference a stored person, or a storage error.
    #[tracing::instrument(skip(self, vehicle), fields(vehicle_name = %vehicle.name))]
    pub async fn create_vehicle(&self, vehicle: NewVehicle) -> Result<Vehicle, HolonetError> {
        vehicle.validate()?;
        if let Some(pilot_id) = vehicle.pilot_id {
            if self.people.get_by_id(pilot_id).await?.is_none() {
                return Err(ValidationError::UnknownReference {
                    entity: "Person",
                    id: pilot_id.get(),
                }
                .into());
            }
        }
        self.vehicles.create(vehicle).await
    }

    /// Look up a vehicle by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when no vehicle with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_vehicle(&self, id: VehicleId) -> Result<Vehicle, HolonetError> {
        self.vehicles.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Vehicle",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all vehicles.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, HolonetError> {
        self.vehicles.get_all().await
    }

    /// List the vehicles piloted by `pilot_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when the person does not exist,
    /// or a storage error from either repository.
    #[tracing::instrument(skip(self))]
    pub async fn vehicles_of(&self, pilot_id: PersonId) -> Result<Vec<Vehicle>, HolonetError> {
        if self.people.get_by_id(pilot_id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Person",
                id: pilot_id.to_string(),
            }
            .into());
        }
        self.vehicles.find_by_pilot(pilot_id).await
    }

    /// Resolve the pilot of a vehicle, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when the vehicle does not exist,
    /// or a storage error from either repository.
    pub async fn pilot(&self, id: VehicleId) -> Result<Option<Person>, HolonetError> {
        let vehicle = self.get_vehicle(id).await?;
        match vehicle.pilot_id {
            Some(pilot_id) => self.people.get_by_id(pilot_id).await,
            None => Ok(None),
        }
    }
}
