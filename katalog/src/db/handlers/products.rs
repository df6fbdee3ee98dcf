//! Database repository for products.

use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::products::{ProductDBResponse, ProductWriteDBRequest},
};
use crate::types::{CategoryId, ProductId};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection};
use tracing::instrument;

/// Denormalized product view: every read joins the category to surface its
/// display name alongside the product.
const PRODUCT_SELECT: &str = "SELECT p.id, p.naziv AS name, p.sastojci AS ingredients, p.uputa AS instructions, \
                              p.slika_url AS image_url, k.naziv AS category_name \
                              FROM proizvodi p INNER JOIN kategorije k ON p.kategorija_id = k.id";

/// Filter for listing products
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Exact match on the category id
    pub category: Option<CategoryId>,
    /// Substring match on the product name, case-insensitive by collation
    pub search: Option<String>,
}

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub image_url: Option<String>,
    pub category_name: String,
}

impl From<ProductRow> for ProductDBResponse {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            ingredients: row.ingredients,
            instructions: row.instructions,
            image_url: row.image_url,
            category_name: row.category_name,
        }
    }
}

/// Compose the list SELECT from the optional filters.
///
/// Clause order is fixed: the category filter always comes first, the search
/// filter second with AND (or as the sole WHERE when no category is given).
/// Filter values are bound, never interpolated into the statement text.
fn build_list_query(filter: &ProductFilter) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new(PRODUCT_SELECT);

    if let Some(category) = filter.category {
        query.push(" WHERE k.id = ");
        query.push_bind(category);
    }

    if let Some(ref search) = filter.search {
        if filter.category.is_some() {
            query.push(" AND p.naziv LIKE ");
        } else {
            query.push(" WHERE p.naziv LIKE ");
        }
        query.push_bind(format!("%{search}%"));
    }

    query
}

pub struct Products<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Products<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Products<'c> {
    type CreateRequest = ProductWriteDBRequest;
    type UpdateRequest = ProductWriteDBRequest;
    type Response = ProductDBResponse;
    type Id = ProductId;
    type Filter = ProductFilter;

    #[instrument(skip(self, request), fields(name = %request.name, category_id = request.category_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Id> {
        let id = sqlx::query_scalar::<_, ProductId>(
            r#"
            INSERT INTO proizvodi (naziv, sastojci, uputa, kategorija_id, slika_url)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&request.name)
        .bind(&request.ingredients)
        .bind(&request.instructions)
        .bind(request.category_id)
        .bind(request.image_url.as_deref())
        .fetch_one(&mut *self.db)
        .await?;

        Ok(id)
    }

    #[instrument(skip(self), fields(product_id = id), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let sql = format!("{PRODUCT_SELECT} WHERE p.id = ?");
        let product = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(product.map(ProductDBResponse::from))
    }

    #[instrument(skip(self, filter), fields(category = ?filter.category, search = ?filter.search), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let mut query = build_list_query(filter);

        let products = query.build_query_as::<ProductRow>().fetch_all(&mut *self.db).await?;

        Ok(products.into_iter().map(ProductDBResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(product_id = id, name = %request.name), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<bool> {
        // Full replace: every column is written, missing image clears the stored one
        let result = sqlx::query(
            r#"
            UPDATE proizvodi
            SET naziv = ?, sastojci = ?, uputa = ?, kategorija_id = ?, slika_url = ?
            WHERE id = ?
            "#,
        )
        .bind(&request.name)
        .bind(&request.ingredients)
        .bind(&request.instructions)
        .bind(request.category_id)
        .bind(request.image_url.as_deref())
        .bind(id)
        .execute(&mut *self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(product_id = id), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM proizvodi WHERE id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
