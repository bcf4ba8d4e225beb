//! Error responses shared by all handlers.
//!
//! Every failure is logged here before the response is built, so what the
//! caller sees never decides what gets recorded.

use std::any::Any;
use std::fmt::Display;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::Environment;
use crate::api::validation::{FieldError, Schema};

/// Message returned for any 500 in production.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
/// Message returned for any 400.
pub const VALIDATION_ERROR: &str = "Ошибка валидации";

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Проект не найден")]
    pub error: String,
    /// Diagnostic detail, only outside production
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

/// Rejection type of every handler.
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

/// 404 with a fixed message.
pub fn not_found(message: &str, id: &str) -> HandlerError {
    warn!(id, "{}", message);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.to_string(),
            details: None,
        }),
    )
}

/// 500 for an unexpected failure while serving `operation`.
pub fn internal_error(
    environment: Environment,
    operation: &str,
    err: &dyn Display,
) -> HandlerError {
    error!(error = %err, "{}", operation);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(internal_body(environment, operation, err.to_string())),
    )
}

/// 400 listing the field errors outside production.
pub fn validation_failed(environment: Environment, errors: Vec<FieldError>) -> HandlerError {
    warn!(?errors, "Request validation failed");
    let details = if environment.is_production() {
        None
    } else {
        serde_json::to_value(&errors).ok()
    };
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: VALIDATION_ERROR.to_string(),
            details,
        }),
    )
}

/// Validate a JSON body against `T`'s schema.
///
/// A body that could not be read as JSON at all is reported the same way as
/// one with bad fields.
pub fn validated<T: Schema>(
    environment: Environment,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, HandlerError> {
    let Json(value) = payload.map_err(|rejection| {
        validation_failed(
            environment,
            vec![FieldError::new("body", rejection.body_text())],
        )
    })?;
    T::validate(value).map_err(|errors| validation_failed(environment, errors))
}

/// Response for a panic caught while a handler was running.
pub fn panic_response(environment: Environment, panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(panic = %message, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(internal_body(environment, INTERNAL_SERVER_ERROR, message)),
    )
        .into_response()
}

fn internal_body(environment: Environment, operation: &str, detail: String) -> ErrorResponse {
    if environment.is_production() {
        ErrorResponse {
            error: INTERNAL_SERVER_ERROR.to_string(),
            details: None,
        }
    } else {
        ErrorResponse {
            error: operation.to_string(),
            details: Some(Value::String(detail)),
        }
    }
}
