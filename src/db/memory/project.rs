//! In-memory project repository.

use std::cmp::Reverse;

use super::table::Table;
use crate::db::{DbResult, NewProject, Project, ProjectRepository};

/// Memory-backed project repository.
pub struct MemoryProjectRepository {
    pub(crate) table: Table<Project>,
}

impl MemoryProjectRepository {
    pub(crate) fn new() -> Self {
        Self {
            table: Table::new("projects"),
        }
    }
}

impl ProjectRepository for MemoryProjectRepository {
    fn create(&self, project: NewProject) -> DbResult<Project> {
        self.table.insert_with(|id| Project::from_new(id, project))
    }

    fn get(&self, id: &str) -> DbResult<Option<Project>> {
        self.table.get(id)
    }

    fn list(&self) -> DbResult<Vec<Project>> {
        let mut projects = self.table.all()?;
        // Stable: equal `featured` keeps insertion order.
        projects.sort_by_key(|p| Reverse(p.featured));
        Ok(projects)
    }
}
