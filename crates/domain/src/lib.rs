//! # holonet-domain
//!
//! Pure domain model for the holonet catalogue API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Users** (API accounts, never serialized with their password)
//! - Define **Planets** (homeworlds that people reference)
//! - Define **People** (characters, optionally tied to a planet)
//! - Define **Vehicles** (optionally piloted by a person)
//! - Enforce required-field presence and partial-update merging
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).
//!
//! Relationships are plain foreign-key ids. Navigating them (a planet's
//! residents, a person's vehicles) is a lookup performed by the app layer.

pub mod error;
pub mod id;

pub mod people;
pub mod planet;
pub mod user;
pub mod vehicle;
