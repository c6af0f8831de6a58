//! # holonet-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `holonet-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Wrap every write in a transaction that is rolled back on failure
//!
//! ## Dependency rule
//! Depends on `holonet-app` (for port traits) and `holonet-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod people_repo;
mod planet_repo;
mod pool;
mod transaction;
mod user_repo;
mod vehicle_repo;

pub use error::StorageError;
pub use people_repo::SqlitePeopleRepository;
pub use planet_repo::SqlitePlanetRepository;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
pub use vehicle_repo::SqliteVehicleRepository;
