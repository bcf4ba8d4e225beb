//! In-memory content store.

use tracing::debug;

use super::course::MemoryCourseRepository;
use super::education::MemoryEducationRepository;
use super::project::MemoryProjectRepository;
use super::seed;
use super::skill::MemorySkillRepository;
use crate::db::{
    CourseRepository, Database, DbResult, EducationRepository, ProjectRepository, SkillRepository,
};

/// Content store holding every collection in process memory.
///
/// Nothing survives a restart. Construct one per server (or per test) and
/// hand it to the API layer; there is no global instance.
pub struct MemoryDatabase {
    projects: MemoryProjectRepository,
    education: MemoryEducationRepository,
    courses: MemoryCourseRepository,
    skills: MemorySkillRepository,
}

impl Default for MemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDatabase {
    /// Create a store with empty collections (useful for testing).
    pub fn new() -> Self {
        Self {
            projects: MemoryProjectRepository::new(),
            education: MemoryEducationRepository::new(),
            courses: MemoryCourseRepository::new(),
            skills: MemorySkillRepository::new(),
        }
    }

    /// Create a store populated with the demo content.
    pub fn seeded() -> DbResult<Self> {
        let db = Self::new();
        db.seed()?;
        Ok(db)
    }

    /// Insert the demo content into every collection.
    pub fn seed(&self) -> DbResult<()> {
        for project in seed::projects() {
            self.projects.create(project)?;
        }
        for entry in seed::education() {
            self.education.create(entry)?;
        }
        for course in seed::courses() {
            self.courses.create(course)?;
        }
        for skill in seed::skills() {
            self.skills.create(skill)?;
        }

        debug!("Seeded content store");
        Ok(())
    }
}

impl Database for MemoryDatabase {
    fn projects(&self) -> &dyn ProjectRepository {
        &self.projects
    }

    fn education(&self) -> &dyn EducationRepository {
        &self.education
    }

    fn courses(&self) -> &dyn CourseRepository {
        &self.courses
    }

    fn skills(&self) -> &dyn SkillRepository {
        &self.skills
    }
}
