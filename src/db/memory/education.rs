//! In-memory education repository.

use std::cmp::Reverse;

use super::table::Table;
use crate::db::{DbResult, Education, EducationRepository, NewEducation};

/// Memory-backed education repository.
pub struct MemoryEducationRepository {
    pub(crate) table: Table<Education>,
}

impl MemoryEducationRepository {
    pub(crate) fn new() -> Self {
        Self {
            table: Table::new("education"),
        }
    }
}

impl EducationRepository for MemoryEducationRepository {
    fn create(&self, education: NewEducation) -> DbResult<Education> {
        self.table.insert_with(|id| Education::from_new(id, education))
    }

    fn get(&self, id: &str) -> DbResult<Option<Education>> {
        self.table.get(id)
    }

    fn list(&self) -> DbResult<Vec<Education>> {
        let mut entries = self.table.all()?;
        entries.sort_by_key(|e| Reverse(e.start_year_value()));
        Ok(entries)
    }
}
