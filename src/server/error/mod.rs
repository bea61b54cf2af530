//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into HTTP responses. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! The response mapping is deliberately coarse: not-found conditions yield 404
//! with a singular `error` field, and every other request-time failure
//! (validation, referential integrity, persistence) is flattened into a 400
//! with an `errors` array of human-readable messages.

pub mod config;
pub mod notification;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorsDto},
    server::error::{config::ConfigError, notification::NotificationError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Only occurs before the server starts accepting requests.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Flattened into 400 Bad Request with the error message in the `errors`
    /// array. The attempted write, if any, does not persist.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Mail transport setup error.
    ///
    /// Only occurs during startup; send-time failures are swallowed by the
    /// notification service and never reach this type.
    #[error(transparent)]
    MailErr(#[from] NotificationError),

    /// I/O error binding the listen socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message as the `error`
    /// field, e.g. `{"error": "Hero not found"}`.
    #[error("{0}")]
    NotFound(String),

    /// One or more domain validation rules failed.
    ///
    /// Results in 400 Bad Request with the messages as the `errors` array.
    /// Covers bad strength values, too-short descriptions, and dangling
    /// hero/power references.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Converts application errors into HTTP responses.
///
/// Not-found errors map to 404; validation and persistence failures map to
/// 400 with an `errors` array. Anything that can only happen outside the
/// request path (config, socket, transport setup) falls back to a generic 500
/// with the details logged server-side.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsDto { errors })).into_response()
            }
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorsDto {
                        errors: vec![err.to_string()],
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
