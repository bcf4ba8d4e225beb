//! Router-level tests: middleware, docs and store failures.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::json;
use tower::ServiceExt;

use super::test_helpers::{get, json_body, post_json, test_app};
use super::{AppState, Config, Environment, create_router};
use crate::db::{
    CourseRepository, Database, DbError, DbResult, EducationRepository, MemoryDatabase,
    NewProject, NewSkill, Project, ProjectRepository, Skill, SkillRepository,
};

/// A store where projects always fail and skills panic.
struct BrokenDatabase {
    rest: MemoryDatabase,
}

struct FailingProjects;

impl ProjectRepository for FailingProjects {
    fn create(&self, _project: NewProject) -> DbResult<Project> {
        Err(DbError::Database {
            message: "disk full".to_string(),
        })
    }

    fn get(&self, _id: &str) -> DbResult<Option<Project>> {
        Err(DbError::Database {
            message: "disk full".to_string(),
        })
    }

    fn list(&self) -> DbResult<Vec<Project>> {
        Err(DbError::Database {
            message: "disk full".to_string(),
        })
    }
}

struct PanickingSkills;

impl SkillRepository for PanickingSkills {
    fn create(&self, _skill: NewSkill) -> DbResult<Skill> {
        panic!("skill store exploded");
    }

    fn get(&self, _id: &str) -> DbResult<Option<Skill>> {
        panic!("skill store exploded");
    }

    fn list(&self) -> DbResult<Vec<Skill>> {
        panic!("skill store exploded");
    }
}

impl Database for BrokenDatabase {
    fn projects(&self) -> &dyn ProjectRepository {
        &FailingProjects
    }

    fn education(&self) -> &dyn EducationRepository {
        self.rest.education()
    }

    fn courses(&self) -> &dyn CourseRepository {
        self.rest.courses()
    }

    fn skills(&self) -> &dyn SkillRepository {
        &PanickingSkills
    }
}

fn broken_app(environment: Environment) -> Router {
    let db = BrokenDatabase {
        rest: MemoryDatabase::new(),
    };
    let config = Config::default().with_environment(environment);
    create_router(AppState::new(db, environment), &config)
}

async fn request_with_origin(app: &Router, origin: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri("/api/skills")
                .header(header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/api/unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allowed_origin_gets_headers() {
    let app = test_app();

    let response = request_with_origin(&app, "http://localhost:5001").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5001"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_other_origin_gets_no_headers() {
    let app = test_app();

    let response = request_with_origin(&app, "https://evil.example").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_cors_custom_allow_list() {
    let config = Config::default()
        .with_environment(Environment::Development)
        .with_allowed_origins(vec![
            "https://portfolio.example".to_string(),
            "not a header\nvalue".to_string(),
        ]);
    let app = create_router(
        AppState::new(MemoryDatabase::new(), Environment::Development),
        &config,
    );

    let response = request_with_origin(&app, "https://portfolio.example").await;
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://portfolio.example"
    );

    let response = request_with_origin(&app, "http://localhost:5001").await;
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_cors_wildcard_entry_is_skipped() {
    let config = Config::default().with_allowed_origins(vec![
        "*".to_string(),
        "https://portfolio.example".to_string(),
    ]);
    let app = create_router(
        AppState::new(MemoryDatabase::new(), Environment::Production),
        &config,
    );

    let response = request_with_origin(&app, "https://elsewhere.example").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );

    let response = request_with_origin(&app, "https://portfolio.example").await;
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://portfolio.example"
    );
}

#[tokio::test]
async fn test_cors_only_wildcard_sends_no_headers() {
    let config = Config::default().with_allowed_origins(vec!["*".to_string()]);
    let app = create_router(
        AppState::new(MemoryDatabase::new(), Environment::Production),
        &config,
    );

    let response = request_with_origin(&app, "http://localhost:5001").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_docs_disabled_by_default() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_docs_served_when_enabled() {
    let mut config = Config::default();
    config.enable_docs = true;
    let app = create_router(
        AppState::new(MemoryDatabase::new(), Environment::Production),
        &config,
    );

    let response = app
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_store_failure_hidden_in_production() {
    let app = broken_app(Environment::Production);

    let (status, body) = get(&app, "/api/projects").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn test_store_failure_detailed_in_development() {
    let app = broken_app(Environment::Development);

    let (status, body) = get(&app, "/api/projects/some-id").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Не удалось загрузить проект");
    assert_eq!(body["details"], "Database error: disk full");

    let (status, body) = post_json(
        &app,
        "/api/projects",
        &json!({ "title": "t", "description": "d", "technologies": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Некорректные данные проекта");
}

#[tokio::test]
async fn test_validation_runs_before_store() {
    let app = broken_app(Environment::Development);

    let (status, body) = post_json(&app, "/api/projects", &json!({ "title": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Ошибка валидации");
}

#[tokio::test]
async fn test_handler_panic_becomes_500() {
    let app = broken_app(Environment::Production);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/skills").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Internal Server Error" })
    );

    // The server keeps serving after a panic.
    let (status, _) = get(&app, "/api/courses").await;
    assert_eq!(status, StatusCode::OK);
}
