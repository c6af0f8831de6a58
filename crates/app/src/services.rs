//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! Services that follow a foreign key take the target repository as a second
//! parameter; share one repository between services by wrapping it in an `Arc`.

pub mod people_service;
pub mod planet_service;
pub mod user_service;
pub mod vehicle_service;

#[cfg(test)]
pub(crate) mod testing;
