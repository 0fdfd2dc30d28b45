//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Running request payloads through their schema, after any existence
//!   check on the targeted row
//! - **Referential checks**: Confirming referenced rows exist before writing
//! - **Orchestration**: Coordinating repository calls and the mail transport

pub mod artist;
pub mod artist_event;
pub mod event;
pub mod mail;
pub mod ticket;
