//! People service — use-cases for managing people.

use holonet_domain::error::{HolonetError, NotFoundError, ValidationError};
use holonet_domain::id::{PersonId, PlanetId};
use holonet_domain::people::{NewPerson, Person, PersonChanges};
use holonet_domain::planet::Planet;

use crate::ports::{PeopleRepository, PlanetRepository};

/// Application service for people CRUD operations.
pub struct PeopleService<P, PL> {
    people: P,
    planets: PL,
}

impl<P: PeopleRepository, PL: PlanetRepository> PeopleService<P, PL> {
    /// Create a new service; `planets` is used to check and resolve homeworlds.
    pub fn new(people: P, planets: PL) -> Self {
        Self { people, planets }
    }

    async fn ensure_planet(&self, planet_id: Option<PlanetId>) -> Result<(), HolonetError> {
        let Some(planet_id) = planet_id else {
            return Ok(());
        };
        if self.planets.get_by_id(planet_id).await?.is_none() {
            return Err(ValidationError::UnknownReference {
                entity: "Planet",
                id: planet_id.get(),
            }
            .into());
        }
        Ok(())
    }

    /// Create a new person whose homeworld exists.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::Validation`] if `name` is empty or `planet_id`
    /// does not reference a stored planet, or a storage error.
    #[tracing::instrument(skip(self, person), fields(person_name = %person.name))]
    pub async fn create_person(&self, person: NewPerson) -> Result<Person, HolonetError> {
        if person.name.is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        self.ensure_planet(person.planet_id).await?;
        self.people.create(person).await
    }

    /// Look up a person by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_person(&self, id: PersonId) -> Result<Person, HolonetError> {
        self.people.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all people.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_people(&self) -> Result<Vec<Person>, HolonetError> {
        self.people.get_all().await
    }

    /// Merge `changes` over the stored person and persist the result.
    ///
    /// Concurrent updates are last-writer-wins.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when the person does not exist,
    /// [`HolonetError::Validation`] if the merged person is invalid or points
    /// at a missing planet, or a storage error.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_person(
        &self,
        id: PersonId,
        changes: PersonChanges,
    ) -> Result<Person, HolonetError> {
        let current = self.get_person(id).await?;
        let merged = changes.apply(current);
        merged.validate()?;
        self.ensure_planet(merged.planet_id).await?;
        self.people.update(merged).await
    }

    /// Delete a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when no row was deleted, so a
    /// repeated delete of the same id fails, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_person(&self, id: PersonId) -> Result<(), HolonetError> {
        if self.people.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Resolve the homeworld of a person, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when the person does not exist,
    /// or a storage error from either repository.
    pub async fn homeworld(&self, id: PersonId) -> Result<Option<Planet>, HolonetError> {
        let person = self.get_person(id).await?;
        match person.planet_id {
            Some(planet_id) => self.planets.get_by_id(planet_id).await,
            None => Ok(None),
        }
    }
}

fn not_found(id: PersonId) -> HolonetError {
    NotFoundError {
        entity: "Person",
        id: id.to_string(),
    }
    .into()
}
