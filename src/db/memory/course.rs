//! In-memory course repository.

use super::table::Table;
use crate::db::{Course, CourseRepository, DbResult, NewCourse};

/// Memory-backed course repository.
pub struct MemoryCourseRepository {
    pub(crate) table: Table<Course>,
}

impl MemoryCourseRepository {
    pub(crate) fn new() -> Self {
        Self {
            table: Table::new("courses"),
        }
    }
}

impl CourseRepository for MemoryCourseRepository {
    fn create(&self, course: NewCourse) -> DbResult<Course> {
        self.table.insert_with(|id| Course::from_new(id, course))
    }

    fn get(&self, id: &str) -> DbResult<Option<Course>> {
        self.table.get(id)
    }

    fn list(&self) -> DbResult<Vec<Course>> {
        self.table.all()
    }
}
