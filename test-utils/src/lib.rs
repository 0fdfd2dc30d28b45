//! Eventhub Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the event
//! management API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting artists, events, tickets and artist-event links.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_ticket_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_event_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let event = factory::create_event(db).await?;
//!     let ticket = factory::create_ticket(db, event.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
