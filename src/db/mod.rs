//! Content store abstraction layer.
//!
//! Provides trait-based abstractions for data access so that the HTTP layer
//! never depends on a concrete backend.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Project, Education, Course, Skill)
//! - `repository`: Trait definitions for data access
//! - `memory`: In-process backend with seed data

mod error;
pub mod memory;
mod models;
mod repository;
pub mod utils;


pub use error::{DbError, DbResult};
pub use memory::MemoryDatabase;
pub use models::*;
pub use repository::*;
