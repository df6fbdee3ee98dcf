//! API models for products.

use crate::db::models::products::{ProductDBResponse, ProductWriteDBRequest};
use crate::errors::{Error, Result};
use crate::types::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Field list quoted in the 400 response when a write payload is incomplete
pub const PRODUCT_REQUIRED_FIELDS: &str = "name, ingredients, instructions, categoryId";

/// Write payload for creating or updating a product.
///
/// Every field deserializes as optional so validation can report missing
/// fields through the error envelope. Absent, `null` and empty-string values
/// all count as missing. `imageUrl` is the one genuinely optional field, an
/// empty string there is stored as no image.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPayload {
    /// Display name of the product
    #[schema(example = "Sacher torta")]
    pub name: Option<String>,
    /// Ingredient list as free text
    #[schema(example = "chocolate, apricot jam, eggs")]
    pub ingredients: Option<String>,
    /// Preparation instructions as free text
    #[schema(example = "Melt the chocolate, fold in the eggs, bake at 170 C.")]
    pub instructions: Option<String>,
    /// Category the product belongs to
    #[schema(example = 2)]
    pub category_id: Option<CategoryId>,
    /// Optional image URL
    #[schema(example = "https://example.com/sacher.jpg")]
    pub image_url: Option<String>,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ProductPayload {
    /// Check the payload before any database work and convert it into the
    /// repository request. Fails with one 400 listing all required fields
    /// whenever any of them is missing.
    pub fn validate(self) -> Result<ProductWriteDBRequest> {
        let (Some(name), Some(ingredients), Some(instructions), Some(category_id)) = (
            required(self.name),
            required(self.ingredients),
            required(self.instructions),
            self.category_id.filter(|id| *id > 0),
        ) else {
            return Err(Error::MissingFields {
                required: PRODUCT_REQUIRED_FIELDS,
            });
        };

        Ok(ProductWriteDBRequest {
            name,
            ingredients,
            instructions,
            category_id,
            image_url: required(self.image_url),
        })
    }
}

/// A product as returned by the API, with its category name joined in
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Unique identifier of the product
    #[schema(example = 7)]
    pub id: ProductId,
    #[schema(example = "Sacher torta")]
    pub name: String,
    #[schema(example = "chocolate, apricot jam, eggs")]
    pub ingredients: String,
    #[schema(example = "Melt the chocolate, fold in the eggs, bake at 170 C.")]
    pub instructions: String,
    /// Image URL, `null` when the product has none
    #[schema(example = "https://example.com/sacher.jpg")]
    pub image_url: Option<String>,
    /// Display name of the product's category
    #[schema(example = "Torte")]
    pub category_name: String,
}

impl From<ProductDBResponse> for ProductResponse {
    fn from(product: ProductDBResponse) -> Self {
        Self {
            id: product.id,
            name: product.name,
            ingredients: product.ingredients,
            instructions: product.instructions,
            image_url: product.image_url,
            category_name: product.category_name,
        }
    }
}

/// Body of a successful create, echoing the generated id
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductCreated {
    #[schema(example = "Product created successfully")]
    pub message: String,
    #[schema(example = 7)]
    pub id: ProductId,
}

/// Query parameters accepted by the product listing
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListProductsQuery {
    /// Only return products in this category (numeric id)
    pub category: Option<String>,
    /// Only return products whose name contains this substring
    pub search: Option<String>,
}
