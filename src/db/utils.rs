//! Content store utility functions.

use uuid::Uuid;

/// Generate a random UUID v4 string for a new entity.
pub fn generate_entity_id() -> String {
    Uuid::new_v4().to_string()
}
