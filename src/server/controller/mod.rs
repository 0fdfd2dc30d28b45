//! HTTP request handlers.
//!
//! Handlers parse path identifiers, extract the raw JSON body, call the matching service
//! and convert domain models into DTOs. Database failures are tagged with a
//! resource-specific message before they are rendered.

pub mod artist;
pub mod artist_event;
pub mod event;
pub mod mail;
pub mod ticket;

#[cfg(test)]
mod test;
