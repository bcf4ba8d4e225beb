//! Portfolio API server binary.
//!
//! Builds the seeded in-memory store and hands it to the API layer, which
//! only ever sees it through the `Database` trait.

use std::net::IpAddr;

use clap::Parser;
use miette::Diagnostic;
use portfolio::api::{self, ApiError, Config, Environment};
use portfolio::db::{DbError, MemoryDatabase};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(portfolio::binary::database))]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(portfolio::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "portfolio-api")]
#[command(author, version, about = "Portfolio content API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on (falls back to $PORT, then 5001)
    #[arg(short, long)]
    port: Option<u16>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Serve the OpenAPI reference at /docs
    #[arg(long)]
    docs: bool,

    /// Run in development mode (error bodies carry details)
    #[arg(long)]
    dev: bool,

    /// Allowed CORS origin; repeat for several (overrides $PORTFOLIO_ALLOWED_ORIGINS)
    #[arg(long = "allow-origin")]
    allow_origins: Vec<String>,
}

impl Cli {
    /// Flags win over environment variables, which win over defaults.
    fn into_config(self) -> Config {
        let mut config = Config::new();
        config.host = self.host;
        if let Some(port) = self.port {
            config.port = port;
        }
        config.verbosity = self.verbose;
        config.enable_docs = self.docs;
        if self.dev {
            config.environment = Environment::Development;
        }
        if !self.allow_origins.is_empty() {
            config.allowed_origins = self.allow_origins;
        }
        config
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let config = Cli::parse().into_config();

    let db = MemoryDatabase::seeded().map_err(BinaryError::from)?;

    api::run(config, db).await.map_err(BinaryError::from)?;

    Ok(())
}
