//! People — characters of the catalogue.
//!
//! A [`Person`] belongs to at most one planet through `planet_id`. Gender,
//! height, mass and birth year are kept exactly as supplied: `"172"`,
//! `"unknown"` and `"19BBY"` are all valid and never coerced.

use serde::Serialize;

use crate::error::{HolonetError, ValidationError};
use crate::id::{PersonId, PlanetId};

/// A stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub birth_year: Option<String>,
    pub planet_id: Option<PlanetId>,
}

impl Person {
    /// Create a builder for a person that has not been stored yet.
    #[must_use]
    pub fn builder() -> NewPersonBuilder {
        NewPersonBuilder::default()
    }

    /// Check domain invariants of a stored (or about to be stored) person.
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
}

/// A validated person awaiting an id from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub birth_year: Option<String>,
    pub planet_id: Option<PlanetId>,
}

impl NewPerson {
    /// Attach the id assigned by storage.
    #[must_use]
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name,
            gender: self.gender,
            height: self.height,
            mass: self.mass,
            birth_year: self.birth_year,
            planet_id: self.planet_id,
        }
    }
}

/// Step-by-step builder for [`NewPerson`].
#[derive(Debug, Default)]
pub struct NewPersonBuilder {
    name: Option<String>,
    gender: Option<String>,
    height: Option<String>,
    mass: Option<String>,
    birth_year: Option<String>,
    planet_id: Option<PlanetId>,
}

impl NewPersonBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    #[must_use]
    pub fn mass(mut self, mass: impl Into<String>) -> Self {
        self.mass = Some(mass.into());
        self
    }

    #[must_use]
    pub fn birth_year(mut self, birth_year: impl Into<String>) -> Self {
        self.birth_year = Some(birth_year.into());
        self
    }

    #[must_use]
    pub fn planet_id(mut self, planet_id: PlanetId) -> Self {
        self.planet_id = Some(planet_id);
        self
    }

    /// Consume the builder, validate, and return a [`NewPerson`].
    ///
    /// A new person must name a homeworld; a `0` planet id counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::Validation`] if `name` or `planet_id` is missing.
    pub fn build(self) -> Result<NewPerson, HolonetError> {
        let name = self.name.unwrap_or_default();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        let planet_id = self
            .planet_id
            .filter(|id| !id.is_unset())
            .ok_or(ValidationError::MissingField("planet_id"))?;

        Ok(NewPerson {
            name,
            gender: self.gender,
            height: self.height,
            mass: self.mass,
            birth_year: self.birth_year,
            planet_id: Some(planet_id),
        })
    }
}

/// A partial update of a [`Person`].
///
/// `None` keeps the stored value. For optional columns, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub gender: Option<Option<String>>,
    pub height: Option<Option<String>>,
    pub mass: Option<Option<String>>,
    pub birth_year: Option<Option<String>>,
    pub planet_id: Option<Option<PlanetId>>,
}

impl PersonChanges {
    /// Merge these changes over `person`. The id never changes.
    #[must_use]
    pub fn apply(self, person: Person) -> Person {
        Person {
            id: person.id,
            name: self.name.unwrap_or(person.name),
            gender: self.gender.unwrap_or(person.gender),
            height: self.height.unwrap_or(person.height),
            mass: self.mass.unwrap_or(person.mass),
            birth_year: self.birth_year.unwrap_or(person.birth_year),
            planet_id: self.planet_id.unwrap_or(person.planet_id),
        }
    }
}
