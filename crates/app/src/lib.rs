//! # holonet-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository` — create, get, list users
//!   - `PlanetRepository` — create, get, list planets
//!   - `PeopleRepository` — CRUD for people, lookup by planet
//!   - `VehicleRepository` — create, get, list vehicles, lookup by pilot
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService`, `PlanetService`, `PeopleService`, `VehicleService`
//! - Resolve relationships (homeworld, residents, pilot, vehicles) by id lookup
//! - Check foreign keys before writes so dangling references are reported
//!   as validation errors
//!
//! ## Dependency rule
//! Depends on `holonet-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
