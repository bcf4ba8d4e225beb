//! API route configuration.

use std::any::Any;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CourseResponse, CreateCourseRequest, CreateEducationRequest, CreateProjectRequest,
    CreateSkillRequest, EducationResponse, ErrorResponse, HealthResponse, ProjectResponse,
    SkillResponse,
};
use super::state::AppState;
use super::validation::FieldError;
use super::Config;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "0.1.0",
        description = "Content API for a personal portfolio site",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::list_projects,
        handlers::get_project,
        handlers::create_project,
        handlers::list_education,
        handlers::get_education,
        handlers::create_education,
        handlers::list_courses,
        handlers::get_course,
        handlers::create_course,
        handlers::list_skills,
        handlers::get_skill,
        handlers::create_skill,
    ),
    components(
        schemas(
            HealthResponse,
            ProjectResponse,
            CreateProjectRequest,
            EducationResponse,
            CreateEducationRequest,
            CourseResponse,
            CreateCourseRequest,
            SkillResponse,
            CreateSkillRequest,
            ErrorResponse,
            FieldError,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "projects", description = "Portfolio projects"),
        (name = "education", description = "Education history"),
        (name = "courses", description = "Completed courses"),
        (name = "skills", description = "Skills grouped by category")
    )
)]
pub struct ApiDoc;

/// Create the API router.
///
/// Layers, outermost first: CORS, request tracing, panic recovery.
pub fn create_router<D: Database + 'static>(state: AppState<D>, config: &Config) -> Router {
    let environment = state.environment();

    let system_routes = Router::new().route("/health", get(handlers::health));

    let content_routes = routes!(D => {
        get "/api/projects" => handlers::list_projects,
        get "/api/projects/{id}" => handlers::get_project,
        post "/api/projects" => handlers::create_project,
        get "/api/education" => handlers::list_education,
        get "/api/education/{id}" => handlers::get_education,
        post "/api/education" => handlers::create_education,
        get "/api/courses" => handlers::list_courses,
        get "/api/courses/{id}" => handlers::get_course,
        post "/api/courses" => handlers::create_course,
        get "/api/skills" => handlers::list_skills,
        get "/api/skills/{id}" => handlers::get_skill,
        post "/api/skills" => handlers::create_skill,
    });

    let mut router = system_routes.merge(content_routes);
    if config.enable_docs {
        router = router.merge(Scalar::with_url("/docs", ApiDoc::openapi()));
    }

    router
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
            handlers::panic_response(environment, panic)
        }))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
        .with_state(state)
}

/// CORS for an explicit allow-list. Origins outside it get no CORS headers.
/// Wildcard and unparsable entries are skipped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            // `*` is not an origin; it never matches a request.
            if origin == "*" {
                warn!(%origin, "Ignoring wildcard CORS origin");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "Ignoring invalid CORS origin");
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
