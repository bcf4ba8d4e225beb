//! Education handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use utoipa::ToSchema;

use super::errors::{ErrorResponse, HandlerError, internal_error, not_found, validated};
use crate::api::AppState;
use crate::api::validation::{FieldKind, FieldSpec, Schema};
use crate::db::{Database, Education, NewEducation};

const NOT_FOUND: &str = "Запись об образовании не найдена";
const LIST_FAILED: &str = "Не удалось загрузить список образования";
const GET_FAILED: &str = "Не удалось загрузить запись об образовании";
const CREATE_FAILED: &str = "Некорректные данные об образовании";

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationResponse {
    #[schema(example = "4d1c2b7a-0f0e-4c4b-a1c9-3c9a1f2e5b77")]
    pub id: String,
    #[schema(example = "РТУ МИРЭА")]
    pub institution: String,
    #[schema(example = "Бакалавр")]
    pub degree: String,
    #[schema(example = "Программная инженерия")]
    pub field: Option<String>,
    /// Free text; entries are ordered by its leading number
    #[schema(example = "2023")]
    pub start_year: String,
    #[schema(example = "2027")]
    pub end_year: Option<String>,
    pub description: Option<String>,
}

impl From<Education> for EducationResponse {
    fn from(e: Education) -> Self {
        Self {
            id: e.id,
            institution: e.institution,
            degree: e.degree,
            field: e.field,
            start_year: e.start_year,
            end_year: e.end_year,
            description: e.description,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEducationRequest {
    #[schema(example = "РТУ МИРЭА")]
    pub institution: String,
    #[schema(example = "Бакалавр")]
    pub degree: String,
    pub field: Option<String>,
    #[schema(example = "2023")]
    pub start_year: String,
    pub end_year: Option<String>,
    pub description: Option<String>,
}

impl Schema for CreateEducationRequest {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("institution", FieldKind::Text),
        FieldSpec::required("degree", FieldKind::Text),
        FieldSpec::optional("field", FieldKind::Text),
        FieldSpec::required("startYear", FieldKind::Text),
        FieldSpec::optional("endYear", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Text),
    ];
}

impl From<CreateEducationRequest> for NewEducation {
    fn from(req: CreateEducationRequest) -> Self {
        Self {
            institution: req.institution,
            degree: req.degree,
            field: req.field,
            start_year: req.start_year,
            end_year: req.end_year,
            description: req.description,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List education entries, most recent start year first
#[utoipa::path(
    get,
    path = "/api/education",
    tag = "education",
    responses(
        (status = 200, description = "List of education entries", body = Vec<EducationResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_education<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<EducationResponse>>, HandlerError> {
    let entries = state
        .db()
        .education()
        .list()
        .map_err(|e| internal_error(state.environment(), LIST_FAILED, &e))?;

    Ok(Json(
        entries.into_iter().map(EducationResponse::from).collect(),
    ))
}

/// Get an education entry by ID
#[utoipa::path(
    get,
    path = "/api/education/{id}",
    tag = "education",
    params(("id" = String, Path, description = "Education entry ID")),
    responses(
        (status = 200, description = "Education entry found", body = EducationResponse),
        (status = 404, description = "Education entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_education<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<EducationResponse>, HandlerError> {
    let entry = state
        .db()
        .education()
        .get(&id)
        .map_err(|e| internal_error(state.environment(), GET_FAILED, &e))?
        .ok_or_else(|| not_found(NOT_FOUND, &id))?;

    Ok(Json(EducationResponse::from(entry)))
}

/// Create a new education entry
#[utoipa::path(
    post,
    path = "/api/education",
    tag = "education",
    request_body = CreateEducationRequest,
    responses(
        (status = 201, description = "Education entry created", body = EducationResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_education<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<EducationResponse>), HandlerError> {
    let req: CreateEducationRequest = validated(state.environment(), payload)?;

    let entry = state
        .db()
        .education()
        .create(req.into())
        .map_err(|e| internal_error(state.environment(), CREATE_FAILED, &e))?;

    Ok((StatusCode::CREATED, Json(EducationResponse::from(entry))))
}
