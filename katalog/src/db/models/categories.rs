//! Database models for categories.

use crate::types::CategoryId;

/// Database response for a category
#[derive(Debug, Clone)]
pub struct CategoryDBResponse {
    pub id: CategoryId,
    pub name: String,
}
