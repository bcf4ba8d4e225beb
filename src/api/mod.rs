//! HTTP layer: configuration, routing, handlers.

mod error;
mod handlers;
mod routes;
mod state;
pub mod validation;

#[cfg(test)]
mod routes_test;
#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod validation_test;

use std::net::{IpAddr, SocketAddr};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

pub use error::ApiError;
pub use handlers::{ErrorResponse, INTERNAL_SERVER_ERROR, VALIDATION_ERROR};
pub use routes::{ApiDoc, create_router};
pub use state::AppState;

/// Selects the runtime mode
pub const ENV_VAR: &str = "PORTFOLIO_ENV";
/// Comma-separated CORS allow-list
pub const ALLOWED_ORIGINS_VAR: &str = "PORTFOLIO_ALLOWED_ORIGINS";
/// Listening port
pub const PORT_VAR: &str = "PORT";

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5001";

/// Runtime mode. Production hides diagnostic detail from error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// `development` / `dev` (any case) select Development; anything else is
    /// Production.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Log verbosity (0 = info, 1 = debug, 2+ = trace)
    pub verbosity: u8,
    /// Serve the OpenAPI reference at /docs
    pub enable_docs: bool,
    pub environment: Environment,
    /// Origins that receive CORS headers
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            verbosity: 0,
            enable_docs: false,
            environment: Environment::default(),
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
        }
    }
}

impl Config {
    /// Defaults overridden by `PORTFOLIO_ENV`, `PORTFOLIO_ALLOWED_ORIGINS`
    /// and `PORT` where set.
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Ok(name) = std::env::var(ENV_VAR) {
            config.environment = Environment::from_name(&name);
        }
        if let Ok(origins) = std::env::var(ALLOWED_ORIGINS_VAR) {
            config.allowed_origins = parse_origins(&origins);
        }
        if let Some(port) = std::env::var(PORT_VAR).ok().and_then(|p| p.parse().ok()) {
            config.port = port;
        }

        config
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }
}

/// Split a comma-separated origin list, dropping empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Initialize tracing subscriber with env filter
fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "portfolio=info,tower_http=info",
        1 => "portfolio=debug,tower_http=debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server with the given configuration and content store
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    init_tracing(config.verbosity);

    let state = AppState::new(db, config.environment);
    let app = create_router(state, &config);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!(
        environment = ?config.environment,
        origins = ?config.allowed_origins,
        "API server listening on http://{}",
        addr
    );

    axum::serve(listener, app).await.map_err(ApiError::Serve)?;
    Ok(())
}
