//! In-memory skill repository.

use super::table::Table;
use crate::db::{DbResult, NewSkill, Skill, SkillRepository};

/// Memory-backed skill repository.
pub struct MemorySkillRepository {
    pub(crate) table: Table<Skill>,
}

impl MemorySkillRepository {
    pub(crate) fn new() -> Self {
        Self {
            table: Table::new("skills"),
        }
    }
}

impl SkillRepository for MemorySkillRepository {
    fn create(&self, skill: NewSkill) -> DbResult<Skill> {
        self.table.insert_with(|id| Skill::from_new(id, skill))
    }

    fn get(&self, id: &str) -> DbResult<Option<Skill>> {
        self.table.get(id)
    }

    fn list(&self) -> DbResult<Vec<Skill>> {
        self.table.all()
    }
}
