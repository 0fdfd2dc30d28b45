//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let artist = factory::create_artist(&db).await?;
//! let event = factory::create_event(&db).await?;
//! let link = factory::create_artist_event(&db, artist.id, event.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let artist = factory::artist::ArtistFactory::new(&db)
//!     .name("Anitta")
//!     .genre("Pop")
//!     .build()
//!     .await?;
//! ```

pub mod artist;
pub mod artist_event;
pub mod event;
pub mod helpers;
pub mod ticket;

pub use artist::create_artist;
pub use artist_event::create_artist_event;
pub use event::create_event;
pub use ticket::create_ticket;
