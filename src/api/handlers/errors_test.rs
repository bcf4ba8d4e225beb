//! Tests for handler error responses.

use std::fmt;

use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::{Value, json};

use super::errors::{internal_error, not_found, panic_response, validation_failed};
use crate::api::Environment;
use crate::api::validation::FieldError;
use crate::db::DbError;

struct Boom;

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lock poisoned")
    }
}

fn body_json<T: serde::Serialize>(body: &T) -> Value {
    serde_json::to_value(body).unwrap()
}

#[test]
fn internal_error_is_generic_in_production() {
    let (status, body) = internal_error(Environment::Production, "Не удалось загрузить курс", &Boom);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(&body.0), json!({ "error": "Internal Server Error" }));
}

#[test]
fn internal_error_carries_detail_in_development() {
    let err = DbError::Database {
        message: "lock poisoned".to_string(),
    };
    let (status, body) = internal_error(Environment::Development, "Не удалось загрузить курс", &err);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(&body.0),
        json!({
            "error": "Не удалось загрузить курс",
            "details": "Database error: lock poisoned"
        })
    );
}

#[test]
fn not_found_has_only_message() {
    let (status, body) = not_found("Курс не найден", "abc");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body_json(&body.0), json!({ "error": "Курс не найден" }));
}

#[test]
fn validation_details_depend_on_environment() {
    let errors = vec![FieldError::new("name", "required")];

    let (status, body) = validation_failed(Environment::Development, errors.clone());
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(&body.0),
        json!({
            "error": "Ошибка валидации",
            "details": [{ "field": "name", "reason": "required" }]
        })
    );

    let (_, body) = validation_failed(Environment::Production, errors);
    assert_eq!(body_json(&body.0), json!({ "error": "Ошибка валидации" }));
}

#[tokio::test]
async fn panic_response_hides_message_in_production() {
    let response = panic_response(Environment::Production, Box::new("secret state"));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn panic_response_shows_message_in_development() {
    let response = panic_response(Environment::Development, Box::new("index out of bounds".to_string()));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["details"], "index out of bounds");
}
