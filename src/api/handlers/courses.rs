//! Course handlers.

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
use crate::db::{Course, Database, NewCourse};

const NOT_FOUND: &str = "Курс не найден";
const LIST_FAILED: &str = "Не удалось получить список курсов";
const GET_FAILED: &str = "Не удалось загрузить курс";
const CREATE_FAILED: &str = "Некорректные данные курса";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: String,
    #[schema(example = "Frontend-разработчик")]
    pub name: String,
    #[schema(example = "Яндекс Практикум")]
    pub platform: String,
    #[schema(example = "Июль 2025")]
    pub completion_date: String,
    pub certificate_url: Option<String>,
    pub description: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        Self {
            id: c.id,
            name: c.name,
            platform: c.platform,
            completion_date: c.completion_date,
            certificate_url: c.certificate_url,
            description: c.description,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[schema(example = "Frontend-разработчик")]
    pub name: String,
    #[schema(example = "Яндекс Практикум")]
    pub platform: String,
    #[schema(example = "Июль 2025")]
    pub completion_date: String,
    pub certificate_url: Option<String>,
    pub description: Option<String>,
}

impl Schema for CreateCourseRequest {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("platform", FieldKind::Text),
        FieldSpec::required("completionDate", FieldKind::Text),
        FieldSpec::optional("certificateUrl", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Text),
    ];
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        Self {
            name: req.name,
            platform: req.platform,
            completion_date: req.completion_date,
            certificate_url: req.certificate_url,
            description: req.description,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "courses",
    responses(
        (status = 200, description = "List of courses", body = Vec<CourseResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_courses<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<CourseResponse>>, HandlerError> {
    let courses = state
        .db()
        .courses()
        .list()
        .map_err(|e| internal_error(state.environment(), LIST_FAILED, &e))?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = "courses",
    params(("id" = String, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_course<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<CourseResponse>, HandlerError> {
    let course = state
        .db()
        .courses()
        .get(&id)
        .map_err(|e| internal_error(state.environment(), GET_FAILED, &e))?
        .ok_or_else(|| not_found(NOT_FOUND, &id))?;

    Ok(Json(CourseResponse::from(course)))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    tag = "courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_course<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseResponse>), HandlerError> {
    let req: CreateCourseRequest = validated(state.environment(), payload)?;

    let course = state
        .db()
        .courses()
        .create(req.into())
        .map_err(|e| internal_error(state.environment(), CREATE_FAILED, &e))?;

    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}
