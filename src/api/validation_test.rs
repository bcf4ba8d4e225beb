//! Tests for payload validation.

use serde::Deserialize;
use serde_json::json;

use super::validation::{FieldError, FieldKind, FieldSpec, Schema};

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    title: String,
    tags: Vec<String>,
    #[serde(default)]
    rank: i32,
    note: Option<String>,
}

impl Schema for Sample {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("tags", FieldKind::TextList),
        FieldSpec::optional("rank", FieldKind::Integer),
        FieldSpec::optional("note", FieldKind::Text),
    ];
}

#[test]
fn valid_payload_deserializes() {
    let sample = Sample::validate(json!({
        "title": "ok",
        "tags": ["a", "b"],
        "rank": 4,
        "note": null
    }))
    .unwrap();

    assert_eq!(
        sample,
        Sample {
            title: "ok".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            rank: 4,
            note: None,
        }
    );
}

#[test]
fn optional_fields_may_be_absent() {
    let sample = Sample::validate(json!({ "title": "ok", "tags": [] })).unwrap();
    assert_eq!(sample.rank, 0);
    assert_eq!(sample.note, None);
}

#[test]
fn unknown_keys_are_ignored() {
    let sample = Sample::validate(json!({
        "id": "client-chosen",
        "title": "ok",
        "tags": [],
        "extra": true
    }))
    .unwrap();
    assert_eq!(sample.title, "ok");
}

#[test]
fn missing_required_fields_are_all_reported() {
    let errors = Sample::validate(json!({})).unwrap_err();
    assert_eq!(
        errors,
        vec![
            FieldError::new("title", "required"),
            FieldError::new("tags", "required"),
        ]
    );
}

#[test]
fn null_required_field_is_missing() {
    let errors = Sample::validate(json!({ "title": null, "tags": [] })).unwrap_err();
    assert_eq!(errors, vec![FieldError::new("title", "required")]);
}

#[test]
fn type_mismatches_are_reported() {
    let errors = Sample::validate(json!({
        "title": 42,
        "tags": "rust",
        "rank": "high",
        "note": false
    }))
    .unwrap_err();

    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["title", "tags", "rank", "note"]);
    assert_eq!(errors[0].reason, "expected string, received integer");
    assert_eq!(errors[1].reason, "expected array, received string");
    assert_eq!(errors[2].reason, "expected integer, received string");
    assert_eq!(errors[3].reason, "expected string, received boolean");
}

#[test]
fn wrong_list_element_types_are_reported_by_index() {
    let errors = Sample::validate(json!({
        "title": "ok",
        "tags": ["a", 1, "c", null]
    }))
    .unwrap_err();

    assert_eq!(
        errors,
        vec![
            FieldError::new("tags[1]", "expected string, received integer"),
            FieldError::new("tags[3]", "expected string, received null"),
        ]
    );
}

#[test]
fn fractional_and_out_of_range_integers_fail() {
    let errors = Sample::validate(json!({ "title": "ok", "tags": [], "rank": 1.5 })).unwrap_err();
    assert_eq!(errors[0].reason, "expected integer, received number");

    let errors =
        Sample::validate(json!({ "title": "ok", "tags": [], "rank": 10_000_000_000i64 }))
            .unwrap_err();
    assert_eq!(errors[0].reason, "integer out of range");
}

#[test]
fn integral_floats_are_integers() {
    let sample = Sample::validate(json!({ "title": "ok", "tags": [], "rank": 2.0 })).unwrap();
    assert_eq!(sample.rank, 2);

    let sample = Sample::validate(json!({ "title": "ok", "tags": [], "rank": 1e3 })).unwrap();
    assert_eq!(sample.rank, 1000);

    let errors = Sample::validate(json!({ "title": "ok", "tags": [], "rank": 3e10 })).unwrap_err();
    assert_eq!(errors, vec![FieldError::new("rank", "integer out of range")]);
}

#[test]
fn non_object_body_fails() {
    let errors = Sample::validate(json!(["title"])).unwrap_err();
    assert_eq!(errors, vec![FieldError::new("body", "expected object")]);
}
