//! API models for categories.

use crate::db::models::categories::CategoryDBResponse;
use crate::types::CategoryId;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    /// Unique identifier of the category
    #[schema(example = 1)]
    pub id: CategoryId,
    /// Display name of the category
    #[schema(example = "Torte")]
    pub name: String,
}

impl From<CategoryDBResponse> for CategoryResponse {
    fn from(category: CategoryDBResponse) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}
