//! Database request and response models.
//!
//! These structures define the contract between repositories and their
//! callers. They are distinct from the API models in [`crate::api::models`]
//! so the storage representation can evolve independently of the wire
//! format: API payloads are validated and normalized before they become a
//! `*DBRequest`, and `*DBResponse` values are converted into API responses
//! at the handler boundary.
//!
//! # Model Categories
//!
//! - [`products`]: write request and denormalized read response for products
//! - [`categories`]: read response for categories

pub mod categories;
pub mod products;

pub use categories::CategoryDBResponse;
pub use products::{ProductDBResponse, ProductWriteDBRequest};
