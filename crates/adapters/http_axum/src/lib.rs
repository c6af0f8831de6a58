//! # holonet-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`/user`, `/people`, `/planet`, `/planets/{id}`,
//!   `/vehicle`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses, including the literal
//!   error messages clients rely on
//! - Treat `/people` and `/people/` as the same route
//!
//! ## Dependency rule
//! Depends on `holonet-app` (for port traits and services) and `holonet-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
