//! Server lifecycle errors.

use std::net::SocketAddr;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}")]
    #[diagnostic(
        code(portfolio::api::bind),
        help("Is the port already in use? Stop the other process or pick another one with --port.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(portfolio::api::serve))]
    Serve(#[source] std::io::Error),
}
