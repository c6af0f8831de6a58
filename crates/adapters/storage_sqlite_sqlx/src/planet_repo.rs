//! `SQLite` implementation of [`PlanetRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holonet_app::ports::PlanetRepository;
use holonet_domain::error::HolonetError;
use holonet_domain::id::PlanetId;
use holonet_domain::planet::{NewPlanet, Planet};

use crate::error::StorageError;
use crate::transaction::settle;

/// Wrapper for converting database rows into domain [`Planet`].
struct Wrapper(Planet);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Planet> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Planet {
            id: PlanetId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            climate: row.try_get("climate")?,
            population: row.try_get("population")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO planet (name, climate, population) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM planet WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM planet ORDER BY id";

/// `SQLite`-backed planet repository.
#[derive(Clone)]
pub struct SqlitePlanetRepository {
    pool: SqlitePool,
}

impl SqlitePlanetRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlanetRepository for SqlitePlanetRepository {
    fn create(
        &self,
        planet: NewPlanet,
    ) -> impl Future<Output = Result<Planet, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;
            let outcome = sqlx::query(INSERT)
                .bind(&planet.name)
                .bind(planet.climate.as_deref())
                .bind(planet.population.as_deref())
                .execute(&mut *tx)
                .await;
            let done = settle(tx, outcome).await?;

            Ok(planet.into_planet(PlanetId::new(done.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: PlanetId,
    ) -> impl Future<Output = Result<Option<Planet>, HolonetError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Planet>, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
