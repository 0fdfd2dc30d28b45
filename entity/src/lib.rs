//! SeaORM entity models for the event management schema.
//!
//! Tables are created by the `migration` crate; these models mirror them column for
//! column. Relations are declared so repositories can eager-load artists, events and
//! tickets with `find_also_related` / `find_with_related`.

pub mod prelude;

pub mod artist;
pub mod artist_event;
pub mod event;
pub mod ticket;
