//! Storage port — repository traits for persistence.
//!
//! Repositories assign ids on `create`. Every write is atomic: if it fails,
//! nothing of it is visible to later reads.

use std::future::Future;
use std::sync::Arc;

use holonet_domain::error::HolonetError;
use holonet_domain::id::{PersonId, PlanetId, UserId, VehicleId};
use holonet_domain::people::{NewPerson, Person};
use holonet_domain::planet::{NewPlanet, Planet};
use holonet_domain::user::{NewUser, User};
use holonet_domain::vehicle::{NewVehicle, Vehicle};

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Store a new user and return it with its assigned id.
    ///
    /// A duplicate email is a storage error.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HolonetError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HolonetError>> + Send;

    /// Get all users.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HolonetError>> + Send;
}

/// Repository for persisting and querying [`Planet`]s.
pub trait PlanetRepository {
    /// Store a new planet and return it with its assigned id.
    fn create(
        &self,
        planet: NewPlanet,
    ) -> impl Future<Output = Result<Planet, HolonetError>> + Send;

    /// Get a planet by its unique identifier.
    fn get_by_id(
        &self,
        id: PlanetId,
    ) -> impl Future<Output = Result<Option<Planet>, HolonetError>> + Send;

    /// Get all planets.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Planet>, HolonetError>> + Send;
}

/// Repository for persisting and querying [`Person`]s.
pub trait PeopleRepository {
    /// Store a new person and return it with its assigned id.
    fn create(
        &self,
        person: NewPerson,
    ) -> impl Future<Output = Result<Person, HolonetError>> + Send;

    /// Get a person by its unique identifier.
    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, HolonetError>> + Send;

    /// Get all people.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, HolonetError>> + Send;

    /// Get the people whose homeworld is `planet_id`.
    fn find_by_planet(
        &self,
        planet_id: PlanetId,
    ) -> impl Future<Output = Result<Vec<Person>, HolonetError>> + Send;

    /// Overwrite every column of an existing person.
    fn update(&self, person: Person)
    -> impl Future<Output = Result<Person, HolonetError>> + Send;

    /// Delete a person, returning `false` when no row matched.
    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, HolonetError>> + Send;
}

/// Repository for persisting and querying [`Vehicle`]s.
pub trait VehicleRepository {
    /// Store a new vehicle and return it with its assigned id.
    fn create(
        &self,
        vehicle: NewVehicle,
    ) -> impl Future<Output = Result<Vehicle, HolonetError>> + Send;

    /// Get a vehicle by its unique identifier.
    fn get_by_id(
        &self,
        id: VehicleId,
    ) -> impl Future<Output = Result<Option<Vehicle>, HolonetError>> + Send;

    /// Get all vehicles.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Vehicle>, HolonetError>> + Send;

    /// Get the vehicles piloted by `pilot_id`.
    fn find_by_pilot(
        &self,
        pilot_id: PersonId,
    ) -> impl Future<Output = Result<Vec<Vehicle>, HolonetError>> + Send;
}

impl<T: UserRepository + Send + Sync> UserRepository for Arc<T> {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HolonetError>> + Send {
        (**self).create(user)
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HolonetError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HolonetError>> + Send {
        (**self).get_all()
    }
}

impl<T: PlanetRepository + Send + Sync> PlanetRepository for Arc<T> {
    fn create(
        &self,
        planet: NewPlanet,
    ) -> impl Future<Output = Result<Planet, HolonetError>> + Send {
        (**self).create(planet)
    }

    fn get_by_id(
        &self,
        id: PlanetId,
    ) -> impl Future<Output = Result<Option<Planet>, HolonetError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Planet>, HolonetError>> + Send {
        (**self).get_all()
    }
}

impl<T: PeopleRepository + Send + Sync> PeopleRepository for Arc<T> {
    fn create(
        &self,
        person: NewPerson,
    ) -> impl Future<Output = Result<Person, HolonetError>> + Send {
        (**self).create(person)
    }

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, HolonetError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, HolonetError>> + Send {
        (**self).get_all()
    }

    fn find_by_planet(
        &self,
        planet_id: PlanetId,
    ) -> impl Future<Output = Result<Vec<Person>, HolonetError>> + Send {
        (**self).find_by_planet(planet_id)
    }

    fn update(
        &self,
        person: Person,
    ) -> impl Future<Output = Result<Person, HolonetError>> + Send {
        (**self).update(person)
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, HolonetError>> + Send {
        (**self).delete(id)
    }
}

impl<T: VehicleRepository + Send + Sync> VehicleRepository for Arc<T> {
    fn create(
        &self,
        vehicle: NewVehicle,
    ) -> impl Future<Output = Result<Vehicle, HolonetError>> + Send {
        (**self).create(vehicle)
    }

    fn get_by_id(
        &self,
        id: VehicleId,
    ) -> impl Future<Output = Result<Option<Vehicle>, HolonetError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Vehicle>, HolonetError>> + Send {
        (**self).get_all()
    }

    fn find_by_pilot(
        &self,
        pilot_id: PersonId,
    ) -> impl Future<Output = Result<Vec<Vehicle>, HolonetError>> + Send {
        (**self).find_by_pilot(pilot_id)
    }
}
