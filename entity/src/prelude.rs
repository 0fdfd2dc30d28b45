pub use super::artist::Entity as Artist;
pub use super::artist_event::Entity as ArtistEvent;
pub use super::event::Entity as Event;
pub use super::ticket::Entity as Ticket;
