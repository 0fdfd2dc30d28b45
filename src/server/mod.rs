//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation, including API endpoints,
//! business logic, data access and outbound e-mail. The backend uses Axum as the web
//! framework, SeaORM for database operations and lettre for SMTP delivery.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation order, referential checks and orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Validation** (`validation/`) - Declarative schemas for raw JSON payloads
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Mail** (`mail/`) - Transport abstraction and the SMTP relay implementation
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, mail transport)
//! - **Startup** (`startup`) - Database connection, migrations, SMTP setup and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the matching controller
//! 2. **Controller** parses path identifiers and extracts the JSON body
//! 3. **Service** checks the target exists, validates the body and checks references
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod mail;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
