//! Database repositories.
//!
//! Each repository wraps a borrowed connection and owns the SQL for one
//! entity. Handlers acquire a connection from the pool, hand it to a
//! repository, and translate the outcome into an HTTP response.
//!
//! - [`categories`] - read-only category listing
//! - [`products`] - product CRUD and filtered listing
//! - [`repository`] - the trait the CRUD repositories implement

pub mod categories;
pub mod products;
pub mod repository;

pub use categories::Categories;
pub use products::{ProductFilter, Products};
pub use repository::Repository;
