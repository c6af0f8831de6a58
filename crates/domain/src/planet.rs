//! Planet — a homeworld. Climate and population are free text.

use serde::Serialize;

use crate::error::{HolonetError, ValidationError};
use crate::id::PlanetId;

/// A stored planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
}

impl Planet {
    /// Create a builder for a planet that has not been stored yet.
    #[must_use]
    pub fn builder() -> NewPlanetBuilder {
        NewPlanetBuilder::default()
    }
}

/// A validated planet awaiting an id from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
}

impl NewPlanet {
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
    pub fn into_planet(self, id: PlanetId) -> Planet {
        Planet {
            id,
            name: self.name,
            climate: self.climate,
            population: self.population,
        }
    }
}

/// Step-by-step builder for [`NewPlanet`].
#[derive(Debug, Default)]
pub struct NewPlanetBuilder {
    name: Option<String>,
    climate: Option<String>,
    population: Option<String>,
}

impl NewPlanetBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }

    #[must_use]
    pub fn population(mut self, population: impl Into<String>) -> Self {
        self.population = Some(population.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewPlanet`].
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<NewPlanet, HolonetError> {
        let planet = NewPlanet {
            name: self.name.unwrap_or_default(),
            climate: self.climate,
            population: self.population,
        };
        planet.validate()?;
        Ok(planet)
    }
}
