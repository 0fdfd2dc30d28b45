//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod mail;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{config::ConfigError, mail::MailError},
        validation::{ValidationErrors, NOT_AN_OBJECT},
    },
};

const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Services return this variant; controllers attach a resource-specific message
    /// through [`StorageContext`] before it reaches the client.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Outbound e-mail could not be built or delivered.
    ///
    /// Results in 500 Internal Server Error carrying the transport message.
    #[error(transparent)]
    MailErr(#[from] MailError),

    /// Request body failed its validation schema.
    ///
    /// Results in 400 Bad Request with one message per violated rule.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Request body could not be extracted as JSON.
    ///
    /// Results in 400 Bad Request whatever the rejection; axum's text is only logged.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Storage failure with the message shown to the client.
    ///
    /// Results in 500 Internal Server Error; `source` is only logged.
    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        source: sea_orm::DbErr,
    },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, such as a non-numeric path identifier.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Write would violate a uniqueness rule.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, `JsonRejection` and `BadRequest` variants
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` variant
/// - 500 Internal Server Error - For `Storage` and `MailErr` with their message, and a
///   generic message for every other variant
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::messages(errors.into_messages())),
            )
                .into_response(),
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, Json(ErrorDto::message(NOT_AN_OBJECT))).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::message(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::message(msg))).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto::message(msg))).into_response()
            }
            Self::Storage { message, source } => {
                tracing::error!("{}: {}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::message(message)),
                )
                    .into_response()
            }
            Self::MailErr(err) => {
                tracing::error!("Failed to send e-mail: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::message(err.to_string())),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::message(INTERNAL_ERROR_MESSAGE)),
        )
            .into_response()
    }
}

/// Attaches a client-facing message to database failures.
pub trait StorageContext<T> {
    /// Replaces a bare [`AppError::DbErr`] with [`AppError::Storage`] carrying `message`.
    /// Every other error passes through untouched.
    fn storage_context(self, message: &'static str) -> Result<T, AppError>;
}

impl<T> StorageContext<T> for Result<T, AppError> {
    fn storage_context(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|err| match err {
            AppError::DbErr(source) => AppError::Storage { message, source },
            err => err,
        })
    }
}
