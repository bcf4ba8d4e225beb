//! Project handlers.

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
use crate::db::{Database, NewProject, Project};

const NOT_FOUND: &str = "Проект не найден";
const LIST_FAILED: &str = "Не удалось получить список проектов";
const GET_FAILED: &str = "Не удалось загрузить проект";
const CREATE_FAILED: &str = "Некорректные данные проекта";

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Project response DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    /// Unique identifier (UUID)
    #[schema(example = "0b6f3c1e-6a57-4a5e-9f51-2f1f3b7c9d10")]
    pub id: String,
    #[schema(example = "eBilet")]
    pub title: String,
    #[schema(example = "Веб-сервис для бронирования билетов")]
    pub description: String,
    /// Technologies in display order
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    /// Sort weight, higher first
    #[schema(example = 2)]
    pub featured: i32,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            technologies: p.technologies,
            live_url: p.live_url,
            github_url: p.github_url,
            image_url: p.image_url,
            featured: p.featured,
        }
    }
}

/// Create project request DTO
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[schema(example = "eBilet")]
    pub title: String,
    #[schema(example = "Веб-сервис для бронирования билетов")]
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    /// Defaults to 0
    #[serde(default)]
    pub featured: i32,
}

impl Schema for CreateProjectRequest {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("description", FieldKind::Text),
        FieldSpec::required("technologies", FieldKind::TextList),
        FieldSpec::optional("liveUrl", FieldKind::Text),
        FieldSpec::optional("githubUrl", FieldKind::Text),
        FieldSpec::optional("imageUrl", FieldKind::Text),
        FieldSpec::optional("featured", FieldKind::Integer),
    ];
}

impl From<CreateProjectRequest> for NewProject {
    fn from(req: CreateProjectRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            technologies: req.technologies,
            live_url: req.live_url,
            github_url: req.github_url,
            image_url: req.image_url,
            featured: req.featured,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all projects
///
/// Most featured first; projects with equal weight keep creation order.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "List of projects", body = Vec<ProjectResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_projects<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<ProjectResponse>>, HandlerError> {
    let projects = state
        .db()
        .projects()
        .list()
        .map_err(|e| internal_error(state.environment(), LIST_FAILED, &e))?;

    Ok(Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_project<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<ProjectResponse>, HandlerError> {
    let project = state
        .db()
        .projects()
        .get(&id)
        .map_err(|e| internal_error(state.environment(), GET_FAILED, &e))?
        .ok_or_else(|| not_found(NOT_FOUND, &id))?;

    Ok(Json(ProjectResponse::from(project)))
}

/// Create a new project
///
/// The server assigns the ID; an `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_project<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectResponse>), HandlerError> {
    let req: CreateProjectRequest = validated(state.environment(), payload)?;

    let project = state
        .db()
        .projects()
        .create(req.into())
        .map_err(|e| internal_error(state.environment(), CREATE_FAILED, &e))?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}
