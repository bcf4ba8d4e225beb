//! Application state for the API server.

use std::sync::Arc;

use super::Environment;
use crate::db::Database;

/// Shared application state.
///
/// Generic over `D: Database` so handlers never name a concrete store. The
/// store is injected through the constructor; tests build a fresh one each.
pub struct AppState<D: Database> {
    db: Arc<D>,
    environment: Environment,
}

// Manual Clone impl - only the Arc is cloned, D need not be Clone
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            environment: self.environment,
        }
    }
}

impl<D: Database> AppState<D> {
    pub fn new(db: D, environment: Environment) -> Self {
        Self {
            db: Arc::new(db),
            environment,
        }
    }

    /// Get a reference to the content store.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Runtime mode, decides how much error detail callers see.
    pub fn environment(&self) -> Environment {
        self.environment
    }
}
