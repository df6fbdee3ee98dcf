//! Database models for products.

use crate::types::{CategoryId, ProductId};

/// Database request for writing a product.
///
/// Creates and updates share this shape: an update is a full replace of
/// every column, not a partial merge, so the same validated payload feeds
/// both operations.
#[derive(Debug, Clone)]
pub struct ProductWriteDBRequest {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub category_id: CategoryId,
    pub image_url: Option<String>,
}

/// Database response for a product, denormalized with its category name
#[derive(Debug, Clone)]
pub struct ProductDBResponse {
    pub id: ProductId,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub image_url: Option<String>,
    pub category_name: String,
}
