//! Skill handlers

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
use crate::db::{Database, NewSkill, Skill};

const NOT_FOUND: &str = "Навык не найден";
const LIST_FAILED: &str = "Не удалось получить навыки";
const GET_FAILED: &str = "Не удалось загрузить навык";
const CREATE_FAILED: &str = "Некорректные данные навыка";

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct SkillResponse {
    pub id: String,
    #[schema(example = "React")]
    pub name: String,
    /// Display group
    #[schema(example = "Фронтенд")]
    pub category: String,
    /// Icon identifier resolved by the client
    #[schema(example = "react")]
    pub icon: String,
}

impl From<Skill> for SkillResponse {
    fn from(s: Skill) -> Self {
        Self {
            id: s.id,
            name: s.name,
            category: s.category,
            icon: s.icon,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSkillRequest {
    #[schema(example = "Go")]
    pub name: String,
    #[schema(example = "Бэкенд")]
    pub category: String,
    #[schema(example = "go")]
    pub icon: String,
}

impl Schema for CreateSkillRequest {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("category", FieldKind::Text),
        FieldSpec::required("icon", FieldKind::Text),
    ];
}

impl From<CreateSkillRequest> for NewSkill {
    fn from(req: CreateSkillRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            icon: req.icon,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    responses(
        (status = 200, description = "List of skills", body = Vec<SkillResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
/// List all skills
#[instrument(skip(state))]
pub async fn list_skills<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<SkillResponse>>, HandlerError> {
    let skills = state
        .db()
        .skills()
        .list()
        .map_err(|e| internal_error(state.environment(), LIST_FAILED, &e))?;

    Ok(Json(skills.into_iter().map(SkillResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = String, Path, description = "Skill ID")),
    responses(
        (status = 200, description = "Skill found", body = SkillResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
/// Get a skill by ID
#[instrument(skip(state))]
pub async fn get_skill<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<SkillResponse>, HandlerError> {
    let skill = state
        .db()
        .skills()
        .get(&id)
        .map_err(|e| internal_error(state.environment(), GET_FAILED, &e))?
        .ok_or_else(|| not_found(NOT_FOUND, &id))?;

    Ok(Json(SkillResponse::from(skill)))
}

#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    request_body = CreateSkillRequest,
    responses(
        (status = 201, description = "Skill created", body = SkillResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
/// Create a new skill
#[instrument(skip(state, payload))]
pub async fn create_skill<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SkillResponse>), HandlerError> {
    let req: CreateSkillRequest = validated(state.environment(), payload)?;

    let skill = state
        .db()
        .skills()
        .create(req.into())
        .map_err(|e| internal_error(state.environment(), CREATE_FAILED, &e))?;

    Ok((StatusCode::CREATED, Json(SkillResponse::from(skill))))
}
