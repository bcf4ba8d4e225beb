//! Id-keyed in-memory collection shared by all memory repositories.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::db::utils::generate_entity_id;
use crate::db::{DbError, DbResult, Id};

struct Rows<T> {
    by_id: HashMap<Id, T>,
    /// Ids in insertion order.
    order: Vec<Id>,
}

/// A single collection: concurrent reads, exclusive inserts.
pub(crate) struct Table<T> {
    name: &'static str,
    rows: RwLock<Rows<T>>,
}

impl<T: Clone> Table<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(Rows {
                by_id: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    fn read(&self) -> DbResult<RwLockReadGuard<'_, Rows<T>>> {
        self.rows.read().map_err(|e| DbError::Database {
            message: format!("Failed to acquire {} read lock: {}", self.name, e),
        })
    }

    fn write(&self) -> DbResult<RwLockWriteGuard<'_, Rows<T>>> {
        self.rows.write().map_err(|e| DbError::Database {
            message: format!("Failed to acquire {} write lock: {}", self.name, e),
        })
    }

    /// Store a new row built from a freshly generated id.
    ///
    /// The id is generated while the write lock is held, so it is checked
    /// against every id issued so far.
    pub(crate) fn insert_with<F>(&self, build: F) -> DbResult<T>
    where
        F: FnOnce(Id) -> T,
    {
        let mut rows = self.write()?;
        let mut id = generate_entity_id();
        while rows.by_id.contains_key(&id) {
            id = generate_entity_id();
        }

        let row = build(id.clone());
        rows.order.push(id.clone());
        rows.by_id.insert(id, row.clone());
        Ok(row)
    }

    pub(crate) fn get(&self, id: &str) -> DbResult<Option<T>> {
        Ok(self.read()?.by_id.get(id).cloned())
    }

    /// All rows in insertion order.
    pub(crate) fn all(&self) -> DbResult<Vec<T>> {
        let rows = self.read()?;
        Ok(rows
            .order
            .iter()
            .filter_map(|id| rows.by_id.get(id).cloned())
            .collect())
    }
}
