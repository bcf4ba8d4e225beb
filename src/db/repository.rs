//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the API layer.

use crate::db::{
    DbResult,
    models::{
        Course, Education, NewCourse, NewEducation, NewProject, NewSkill, Project, Skill,
    },
};

/// Repository for Project operations.
pub trait ProjectRepository {
    /// Create a new project. The store assigns the id.
    fn create(&self, project: NewProject) -> DbResult<Project>;

    /// Get a project by ID.
    fn get(&self, id: &str) -> DbResult<Option<Project>>;

    /// Get all projects, most featured first.
    fn list(&self) -> DbResult<Vec<Project>>;
}

/// Repository for Education operations.
pub trait EducationRepository {
    /// Create a new education entry. The store assigns the id.
    fn create(&self, education: NewEducation) -> DbResult<Education>;

    /// Get an education entry by ID.
    fn get(&self, id: &str) -> DbResult<Option<Education>>;

    /// Get all education entries, most recent start year first.
    fn list(&self) -> DbResult<Vec<Education>>;
}

/// Repository for Course operations.
pub trait CourseRepository {
    /// Create a new course. The store assigns the id.
    fn create(&self, course: NewCourse) -> DbResult<Course>;

    /// Get a course by ID.
    fn get(&self, id: &str) -> DbResult<Option<Course>>;

    /// Get all courses in insertion order.
    fn list(&self) -> DbResult<Vec<Course>>;
}

/// Repository for Skill operations.
pub trait SkillRepository {
    /// Create a new skill. The store assigns the id.
    fn create(&self, skill: NewSkill) -> DbResult<Skill>;

    /// Get a skill by ID.
    fn get(&self, id: &str) -> DbResult<Option<Skill>>;

    /// Get all skills in insertion order.
    fn list(&self) -> DbResult<Vec<Skill>>;
}

/// Content store abstraction bundling all repositories.
pub trait Database: Send + Sync {
    /// Get the project repository.
    fn projects(&self) -> &dyn ProjectRepository;

    /// Get the education repository.
    fn education(&self) -> &dyn EducationRepository;

    /// Get the course repository.
    fn courses(&self) -> &dyn CourseRepository;

    /// Get the skill repository.
    fn skills(&self) -> &dyn SkillRepository;
}
