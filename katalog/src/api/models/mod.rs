//! API request and response models.
//!
//! These are the JSON shapes on the wire. Field names are camelCase, the
//! database models they convert from and to stay snake_case. Write payloads
//! deserialize every field as optional and run an explicit `validate` step,
//! so a request with missing fields produces the 400 envelope instead of a
//! deserialization rejection.
//!
//! - [`categories`] - category listing
//! - [`products`] - product CRUD payloads and responses
//! - [`users`] - user endpoints

use serde::Serialize;
use utoipa::ToSchema;

pub mod categories;
pub mod products;
pub mod users;

/// Plain acknowledgement body for updates and deletes
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Product updated successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
