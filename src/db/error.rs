//! Content store error types.
//!
//! Absence of an entity is not an error: lookups return `Option`. The only
//! failure a store reports is an internal fault, which callers surface as a
//! server error. Uses miette for diagnostic output and thiserror for derives.

use miette::Diagnostic;
use thiserror::Error;

/// Content store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Database error: {message}")]
    #[diagnostic(code(portfolio::db::database_error))]
    Database { message: String },
}

/// Result type for content store operations.
pub type DbResult<T> = Result<T, DbError>;
