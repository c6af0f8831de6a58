//! Vehicle — optionally piloted by a person.

use serde::Serialize;

use crate::error::{HolonetError, ValidationError};
use crate::id::{PersonId, VehicleId};

/// A stored vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub model: Option<String>,
    pub pilot_id: Option<PersonId>,
}

impl Vehicle {
    /// Create a builder for a vehicle that has not been stored yet.
    #[must_use]
    pub fn builder() -> NewVehicleBuilder {
        NewVehicleBuilder::default()
    }
}

/// A validated vehicle awaiting an id from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub name: String,
    pub model: Option<String>,
    pub pilot_id: Option<PersonId>,
}

impl NewVehicle {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HolonetError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        Ok(())
    }

    /// Attach the id assigned by storage.
    #[must_use]
    pub fn into_vehicle(self, id: VehicleId) -> Vehicle {
        Vehicle {
            id,
            name: self.name,
            model: self.model,
            pilot_id: self.pilot_id,
        }
    }
}

/// Step-by-step builder for [`NewVehicle`].
#[derive(Debug, Default)]
pub struct NewVehicleBuilder {
    name: Option<String>,
    model: Option<String>,
    pilot_id: Option<PersonId>,
}

impl NewVehicleBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn pilot_id(mut self, pilot_id: PersonId) -> Self {
        self.pilot_id = Some(pilot_id);
        self
    }

    /// Consume the builder, validate, and return a [`NewVehicle`].
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<NewVehicle, HolonetError> {
        let vehicle = NewVehicle {
            name: self.name.unwrap_or_default(),
            model: self.model,
            pilot_id: self.pilot_id,
        };
        vehicle.validate()?;
        Ok(vehicle)
    }
}
