//! Database repository for categories.
//!
//! Categories are read-only through the API, so this repository does not
//! implement the full [`Repository`](crate::db::handlers::repository::Repository)
//! trait. Listing is the only operation.

use crate::db::{errors::Result, models::categories::CategoryDBResponse};
use crate::types::CategoryId;
use sqlx::{FromRow, SqliteConnection};
use tracing::instrument;

#[derive(Debug, Clone, FromRow)]
struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
}

impl From<CategoryRow> for CategoryDBResponse {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

pub struct Categories<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Categories<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn list_all(&mut self) -> Result<Vec<CategoryDBResponse>> {
        let categories = sqlx::query_as::<_, CategoryRow>("SELECT id, naziv AS name FROM kategorije")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(categories.into_iter().map(CategoryDBResponse::from).collect())
    }
}
