//! Base repository trait for database operations.

use crate::db::errors::Result;

/// Base repository trait providing common database operations
///
/// A repository is a data access layer for one table. It provides methods
/// for creating, reading, updating, and deleting entities, as well as
/// listing them with simple filters.
///
/// Mutations report their outcome rather than the written row: `create`
/// returns the generated id, and `update`/`delete` return whether a row was
/// matched. Zero matched rows is the not-found signal for the caller, not a
/// database error.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The request type for updating entities
    type UpdateRequest;

    /// The response/DTO type returned by read operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// The filter type for list operations
    type Filter: Send + Sync;

    /// Create a new entity, returning its generated id
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Id>;

    /// Get an entity by ID
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List entities matching a filter
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>>;

    /// Replace an entity by ID, returning whether a row was matched
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<bool>;

    /// Delete an entity by ID, returning whether a row was matched
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;
}
