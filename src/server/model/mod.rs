//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from
//! raw request payloads by running them through the resource's validation schema.

pub mod artist;
pub mod artist_event;
pub mod event;
pub mod mail;
pub mod ticket;
