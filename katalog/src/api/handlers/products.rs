//! Product CRUD handlers.

use crate::api::handlers::parse_id;
use crate::api::models::products::{
    ListProductsQuery, ProductCreated, ProductPayload, ProductResponse,
};
use crate::api::models::MessageResponse;
use crate::db::handlers::{ProductFilter, Products, Repository};
use crate::errors::{Error, Result};
use crate::types::CategoryId;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

/// Parse the optional `category` query parameter.
///
/// An absent or empty parameter means no filtering, anything else must be a
/// numeric id.
fn parse_category_filter(raw: Option<String>) -> Result<Option<CategoryId>> {
    match raw {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => parse_id(&raw, "category").map(Some),
    }
}

#[utoipa::path(
    get,
    path = "/products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponse>),
        (status = 400, description = "Invalid category filter")
    ),
    tag = "products"
)]
#[tracing::instrument(skip_all)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>> {
    let filter = ProductFilter {
        category: parse_category_filter(query.category)?,
        search: query.search.filter(|s| !s.is_empty()),
    };

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut products = Products::new(&mut pool_conn);

    let products = products.list(&filter).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Invalid product ID"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
#[tracing::instrument(skip_all)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>> {
    let id = parse_id(&id, "Product")?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut products = Products::new(&mut pool_conn);

    let product = products
        .get_by_id(id)
        .await?
        .ok_or(Error::NotFound { resource: "Product" })?;

    Ok(Json(product.into()))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = ProductCreated),
        (status = 400, description = "Missing required fields")
    ),
    tag = "products"
)]
#[tracing::instrument(skip_all)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<ProductCreated>)> {
    // Validation runs before any database work
    let request = payload.validate()?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut products = Products::new(&mut pool_conn);

    let id = products.create(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductCreated {
            message: "Product created successfully".to_string(),
            id,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = MessageResponse),
        (status = 400, description = "Invalid ID or missing required fields"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
#[tracing::instrument(skip_all)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id, "Product")?;
    let request = payload.validate()?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut products = Products::new(&mut pool_conn);

    let updated = products.update(id, &request).await?;
    if !updated {
        return Err(Error::NotFound { resource: "Product" });
    }

    Ok(Json(MessageResponse::new("Product updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, description = "Invalid product ID"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
#[tracing::instrument(skip_all)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id, "Product")?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut products = Products::new(&mut pool_conn);

    let deleted = products.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound { resource: "Product" });
    }

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use sqlx::SqlitePool;

    // The seed migration ships categories 1 Kolači, 2 Torte, 3 Keksi, 4 Deserti

    fn sacher(category_id: i64) -> Value {
        json!({
            "name": "Sacher torta",
            "ingredients": "chocolate, apricot jam, eggs",
            "instructions": "Melt the chocolate, fold in the eggs, bake at 170 C.",
            "categoryId": category_id,
        })
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_products_starts_empty(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.get("/api/products").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_and_fetch_product(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.post("/api/products").json(&sacher(2)).await;
        response.assert_status(StatusCode::CREATED);

        let body = response.json::<Value>();
        assert_eq!(body["message"], "Product created successfully");
        let id = body["id"].as_i64().expect("create should echo the new id");

        let response = server.get(&format!("/api/products/{id}")).await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "id": id,
                "name": "Sacher torta",
                "ingredients": "chocolate, apricot jam, eggs",
                "instructions": "Melt the chocolate, fold in the eggs, bake at 170 C.",
                "imageUrl": null,
                "categoryName": "Torte",
            })
        );
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_with_missing_fields_is_rejected_before_insert(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.post("/api/products").json(&json!({ "name": "Torta" })).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "All fields are required: name, ingredients, instructions, categoryId" })
        );

        // Nothing was written
        let response = server.get("/api/products").await;
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_with_empty_strings_is_rejected(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let mut payload = sacher(1);
        payload["ingredients"] = json!("");

        let response = server.post("/api/products").json(&payload).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_with_unknown_category_is_internal_error(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.post("/api/products").json(&sacher(9999)).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<Value>(), json!({ "error": "Internal server error" }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_with_invalid_id_is_bad_request(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.get("/api/products/abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>(), json!({ "error": "Invalid Product ID: abc" }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_missing_product_is_not_found(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.get("/api/products/9999").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>(), json!({ "message": "Product not found" }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_replaces_every_field(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let mut payload = sacher(2);
        payload["imageUrl"] = json!("https://example.com/sacher.jpg");
        let response = server.post("/api/products").json(&payload).await;
        let id = response.json::<Value>()["id"].as_i64().unwrap();

        let response = server
            .put(&format!("/api/products/{id}"))
            .json(&json!({
                "name": "Linzer",
                "ingredients": "flour, butter, jam",
                "instructions": "Cut rings, bake, sandwich with jam.",
                "categoryId": 3,
            }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "message": "Product updated successfully" }));

        let response = server.get(&format!("/api/products/{id}")).await;
        let body = response.json::<Value>();
        assert_eq!(body["name"], "Linzer");
        assert_eq!(body["categoryName"], "Keksi");
        // The update carried no imageUrl, so the stored one is gone
        assert_eq!(body["imageUrl"], Value::Null);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_missing_product_is_not_found(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.put("/api/products/9999").json(&sacher(1)).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>(), json!({ "message": "Product not found" }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_with_missing_fields_leaves_the_row_alone(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.post("/api/products").json(&sacher(2)).await;
        let id = response.json::<Value>()["id"].as_i64().unwrap();

        let response = server
            .put(&format!("/api/products/{id}"))
            .json(&json!({ "name": "Renamed" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server.get(&format!("/api/products/{id}")).await;
        assert_eq!(response.json::<Value>()["name"], "Sacher torta");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_product(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.post("/api/products").json(&sacher(1)).await;
        let id = response.json::<Value>()["id"].as_i64().unwrap();

        let response = server.delete(&format!("/api/products/{id}")).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "message": "Product deleted successfully" }));

        let response = server.delete(&format!("/api/products/{id}")).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_filtering(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        for (name, category) in [("Sacher torta", 2), ("Dobos torta", 2), ("Vanilin kiflice", 3)] {
            let payload = json!({
                "name": name,
                "ingredients": "see recipe",
                "instructions": "see recipe",
                "categoryId": category,
            });
            server.post("/api/products").json(&payload).await.assert_status(StatusCode::CREATED);
        }

        let response = server.get("/api/products").add_query_param("category", 2).await;
        response.assert_status_ok();
        let body = response.json::<Vec<Value>>();
        assert_eq!(body.len(), 2);
        assert!(body.iter().all(|p| p["categoryName"] == "Torte"));

        let response = server.get("/api/products").add_query_param("search", "TORTA").await;
        let body = response.json::<Vec<Value>>();
        assert_eq!(body.len(), 2);

        let response = server
            .get("/api/products")
            .add_query_param("category", 2)
            .add_query_param("search", "dobos")
            .await;
        let body = response.json::<Vec<Value>>();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["name"], "Dobos torta");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_with_empty_parameters_is_unfiltered(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        server.post("/api/products").json(&sacher(2)).await.assert_status(StatusCode::CREATED);

        let response = server.get("/api/products?category=&search=").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Value>>().len(), 1);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_with_non_numeric_category_is_bad_request(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.get("/api/products").add_query_param("category", "abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>(), json!({ "error": "Invalid category ID: abc" }));
    }
}
