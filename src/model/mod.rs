//! Wire-level DTOs shared by every endpoint.
//!
//! Field names follow the public JSON contract of the API (`nome`, `dataHora`,
//! `preco_base`, ...) through serde renames, while the Rust side keeps English names.

pub mod api;
pub mod artist;
pub mod artist_event;
pub mod event;
pub mod mail;
pub mod ticket;
