//! Planet service — use-cases for planets and their residents.

use holonet_domain::error::{HolonetError, NotFoundError};
use holonet_domain::id::PlanetId;
use holonet_domain::people::Person;
use holonet_domain::planet::{NewPlanet, Planet};

use crate::ports::{PeopleRepository, PlanetRepository};

/// Application service for planets.
pub struct PlanetService<PL, P> {
    planets: PL,
    people: P,
}

impl<PL: PlanetRepository, P: PeopleRepository> PlanetService<PL, P> {
    /// Create a new service; `people` is used to resolve residents.
    pub fn new(planets: PL, people: P) -> Self {
        Self { planets, people }
    }

    /// Create a new planet after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, planet), fields(planet_name = %planet.name))]
    pub async fn create_planet(&self, planet: NewPlanet) -> Result<Planet, HolonetError> {
        planet.validate()?;
        self.planets.create(planet).await
    }

    /// Look up a planet by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when no planet with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_planet(&self, id: PlanetId) -> Result<Planet, HolonetError> {
        self.planets.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Planet",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all planets.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_planets(&self) -> Result<Vec<Planet>, HolonetError> {
        self.planets.get_all().await
    }

    /// List the people whose homeworld is `id`.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when the planet does not exist,
    /// or a storage error from either repository.
    #[tracing::instrument(skip(self))]
    pub async fn residents(&self, id: PlanetId) -> Result<Vec<Person>, HolonetError> {
        let planet = self.get_planet(id).await?;
        self.people.find_by_planet(planet.id).await
    }
}
