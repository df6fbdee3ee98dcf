//! Category listing handler.

use crate::api::models::categories::CategoryResponse;
use crate::db::handlers::Categories;
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponse>)
    ),
    tag = "categories"
)]
#[tracing::instrument(skip_all)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<CategoryResponse>>> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut categories = Categories::new(&mut pool_conn);

    let categories = categories.list_all().await?;

    Ok(Json(categories.into_iter().map(CategoryResponse::from).collect()))
}
