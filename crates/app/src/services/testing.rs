//! In-memory port implementations shared by the service tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use holonet_domain::error::HolonetError;
use holonet_domain::id::{PersonId, PlanetId, UserId, VehicleId};
use holonet_domain::people::{NewPerson, Person};
use holonet_domain::planet::{NewPlanet, Planet};
use holonet_domain::user::{NewUser, User};
use holonet_domain::vehicle::{NewVehicle, Vehicle};

use crate::ports::{PeopleRepository, PlanetRepository, UserRepository, VehicleRepository};

/// Auto-incrementing table; ids start at 1 and are never reused.
pub(crate) struct Table<T> {
    inner: Mutex<(i64, BTreeMap<i64, T>)>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            inner: Mutex::new((0, BTreeMap::new())),
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&self, make: impl FnOnce(i64) -> T) -> T {
        let mut guard = self.inner.lock().unwrap();
        guard.0 += 1;
        let id = guard.0;
        let row = make(id);
        guard.1.insert(id, row.clone());
        row
    }

    fn get(&self, id: i64) -> Option<T> {
        self.inner.lock().unwrap().1.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.inner.lock().unwrap().1.values().cloned().collect()
    }

    fn filter(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.inner
            .lock()
            .unwrap()
            .1
            .values()
            .filter(|row| keep(row))
            .cloned()
            .collect()
    }

    fn replace(&self, id: i64, row: T) {
        self.inner.lock().unwrap().1.insert(id, row);
    }

    fn remove(&self, id: i64) -> bool {
        self.inner.lock().unwrap().1.remove(&id).is_some()
    }
}

#[derive(Default)]
pub(crate) struct InMemoryUsers(pub Table<User>);

#[derive(Default)]
pub(crate) struct InMemoryPlanets(pub Table<Planet>);

#[derive(Default)]
pub(crate) struct InMemoryPeople(pub Table<Person>);

#[derive(Default)]
pub(crate) struct InMemoryVehicles(pub Table<Vehicle>);

impl UserRepository for InMemoryUsers {
    async fn create(&self, user: NewUser) -> Result<User, HolonetError> {
        if self.0.all().iter().any(|u| u.email == user.email) {
            let err = std::io::Error::other("UNIQUE constraint failed: user.email");
            return Err(HolonetError::Storage(Box::new(err)));
        }
        Ok(self
            .0
            .insert_with(|id| user.into_user(UserId::new(id))))
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, HolonetError> {
        Ok(self.0.get(id.get()))
    }

    async fn get_all(&self) -> Result<Vec<User>, HolonetError> {
        Ok(self.0.all())
    }
}

impl PlanetRepository for InMemoryPlanets {
    async fn create(&self, planet: NewPlanet) -> Result<Planet, HolonetError> {
        Ok(self
            .0
            .insert_with(|id| planet.into_planet(PlanetId::new(id))))
    }

    async fn get_by_id(&self, id: PlanetId) -> Result<Option<Planet>, HolonetError> {
        Ok(self.0.get(id.get()))
    }

    async fn get_all(&self) -> Result<Vec<Planet>, HolonetError> {
        Ok(self.0.all())
    }
}

impl PeopleRepository for InMemoryPeople {
    async fn create(&self, person: NewPerson) -> Result<Person, HolonetError> {
        Ok(self
            .0
            .insert_with(|id| person.into_person(PersonId::new(id))))
    }

    async fn get_by_id(&self, id: PersonId) -> Result<Option<Person>, HolonetError> {
        Ok(self.0.get(id.get()))
    }

    async fn get_all(&self) -> Result<Vec<Person>, HolonetError> {
        Ok(self.0.all())
    }

    async fn find_by_planet(&self, planet_id: PlanetId) -> Result<Vec<Person>, HolonetError> {
        Ok(self.0.filter(|p| p.planet_id == Some(planet_id)))
    }

    async fn update(&self, person: Person) -> Result<Person, HolonetError> {
        self.0.replace(person.id.get(), person.clone());
        Ok(person)
    }

    async fn delete(&self, id: PersonId) -> Result<bool, HolonetError> {
        Ok(self.0.remove(id.get()))
    }
}

impl VehicleRepository for InMemoryVehicles {
    async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, HolonetError> {
        Ok(self
            .0
            .insert_with(|id| vehicle.into_vehicle(VehicleId::new(id))))
    }

    async fn get_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, HolonetError> {
        Ok(self.0.get(id.get()))
    }

    async fn get_all(&self) -> Result<Vec<Vehicle>, HolonetError> {
        Ok(self.0.all())
    }

    async fn find_by_pilot(&self, pilot_id: PersonId) -> Result<Vec<Vehicle>, HolonetError> {
        Ok(self.0.filter(|v| v.pilot_id == Some(pilot_id)))
    }
}
