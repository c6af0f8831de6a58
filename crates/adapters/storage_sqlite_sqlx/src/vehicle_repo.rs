//! `SQLite` implementation of [`VehicleRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holonet_app::ports::VehicleRepository;
use holonet_domain::error::HolonetError;
use holonet_domain::id::{PersonId, VehicleId};
use holonet_domain::vehicle::{NewVehicle, Vehicle};

use crate::error::StorageError;
use crate::transaction::settle;

struct Wrapper(Vehicle);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Vehicle> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let pilot_id: Option<i64> = row.try_get("pilot_id")?;

        Ok(Self(Vehicle {
            id: VehicleId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            model: row.try_get("model")?,
            pilot_id: pilot_id.map(PersonId::new),
        }))
    }
}

const INSERT: &str = "INSERT INTO vehicle (name, model, pilot_id) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM vehicle WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM vehicle ORDER BY id";
const SELECT_BY_PILOT: &str = "SELECT * FROM vehicle WHERE pilot_id = ? ORDER BY id";

/// `SQLite`-backed vehicle repository.
#[derive(Clone)]
pub struct SqliteVehicleRepository {
    pool: SqlitePool,
}

impl SqliteVehicleRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl VehicleRepository for SqliteVehicleRepository {
    fn create(
        &self,
        vehicle: NewVehicle,
    ) -> impl Future<Output = Result<Vehicle, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;
            let outcome = sqlx::query(INSERT)
                .bind(&vehicle.name)
                .bind(vehicle.model.as_deref())
                .bind(vehicle.pilot_id.map(PersonId::get))
                .execute(&mut *tx)
                .await;
            let done = settle(tx, outcome).await?;

            Ok(vehicle.into_vehicle(VehicleId::new(done.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: VehicleId,
    ) -> impl Future<Output = Result<Option<Vehicle>, HolonetError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Vehicle>, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_pilot(
        &self,
        pilot_id: PersonId,
    ) -> impl Future<Output = Result<Vec<Vehicle>, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PILOT)
                .bind(pilot_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
