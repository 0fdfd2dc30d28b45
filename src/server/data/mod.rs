//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! resource. Repositories use SeaORM entity models internally and return domain models to
//! keep the data layer separate from business logic. All queries, inserts, updates and
//! deletes are performed through these repositories.

pub mod artist;
pub mod artist_event;
pub mod event;
pub mod ticket;

#[cfg(test)]
mod test;
