//! `SQLite` implementation of [`PeopleRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holonet_app::ports::PeopleRepository;
use holonet_domain::error::HolonetError;
use holonet_domain::id::{PersonId, PlanetId};
use holonet_domain::people::{NewPerson, Person};

use crate::error::StorageError;
use crate::transaction::settle;

/// Wrapper for converting database rows into domain [`Person`].
struct Wrapper(Person);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Person> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let planet_id: Option<i64> = row.try_get("planet_id")?;

        Ok(Self(Person {
            id: PersonId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            gender: row.try_get("gender")?,
            height: row.try_get("height")?,
            mass: row.try_get("mass")?,
            birth_year: row.try_get("birth_year")?,
            planet_id: planet_id.map(PlanetId::new),
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO people (name, gender, height, mass, birth_year, planet_id)
    VALUES (?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM people WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM people ORDER BY id";
const SELECT_BY_PLANET: &str = "SELECT * FROM people WHERE planet_id = ? ORDER BY id";
const UPDATE: &str = r"
    UPDATE people
    SET name = ?, gender = ?, height = ?, mass = ?, birth_year = ?, planet_id = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM people WHERE id = ?";

/// `SQLite`-backed people repository.
#[derive(Clone)]
pub struct SqlitePeopleRepository {
    pool: SqlitePool,
}

impl SqlitePeopleRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PeopleRepository for SqlitePeopleRepository {
    fn create(
        &self,
        person: NewPerson,
    ) -> impl Future<Output = Result<Person, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;
            let outcome = sqlx::query(INSERT)
                .bind(&person.name)
                .bind(person.gender.as_deref())
                .bind(person.height.as_deref())
                .bind(person.mass.as_deref())
                .bind(person.birth_year.as_deref())
                .bind(person.planet_id.map(PlanetId::get))
                .execute(&mut *tx)
                .await;
            let done = settle(tx, outcome).await?;

            Ok(person.into_person(PersonId::new(done.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_planet(
        &self,
        planet_id: PlanetId,
    ) -> impl Future<Output = Result<Vec<Person>, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PLANET)
                .bind(planet_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        person: Person,
    ) -> impl Future<Output = Result<Person, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;
            let outcome = sqlx::query(UPDATE)
                .bind(&person.name)
                .bind(person.gender.as_deref())
                .bind(person.height.as_deref())
                .bind(person.mass.as_deref())
                .bind(person.birth_year.as_deref())
                .bind(person.planet_id.map(PlanetId::get))
                .bind(person.id.get())
                .execute(&mut *tx)
                .await;
            settle(tx, outcome).await?;

            Ok(person)
        }
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;
            let outcome = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&mut *tx)
                .await;
            let done = settle(tx, outcome).await?;

            Ok(done.rows_affected() > 0)
        }
    }
}
