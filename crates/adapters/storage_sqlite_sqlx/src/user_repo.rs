//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holonet_app::ports::UserRepository;
use holonet_domain::error::HolonetError;
use holonet_domain::id::UserId;
use holonet_domain::user::{NewUser, User};

use crate::error::StorageError;
use crate::transaction::settle;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: UserId::new(row.try_get("id")?),
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            is_active: row.try_get("is_active")?,
            firts_name: row.try_get("firts_name")?,
            second_name: row.try_get("second_name")?,
        }))
    }
}

const INSERT: &str = r#"
    INSERT INTO "user" (email, password, is_active, firts_name, second_name)
    VALUES (?, ?, ?, ?, ?)
"#;
const SELECT_BY_ID: &str = r#"SELECT * FROM "user" WHERE id = ?"#;
const SELECT_ALL: &str = r#"SELECT * FROM "user" ORDER BY id"#;

/// `SQLite`-backed user repository.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HolonetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;
            let outcome = sqlx::query(INSERT)
                .bind(&user.email)
                .bind(&user.password)
                .bind(user.is_active)
                .bind(&user.firts_name)
                .bind(&user.second_name)
                .execute(&mut *tx)
                .await;
            let done = settle(tx, outcome).await?;

            Ok(user.into_user(UserId::new(done.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HolonetError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HolonetError>> + Send {
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
