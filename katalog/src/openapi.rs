//! OpenAPI documentation configuration.
//!
//! One document covers the whole catalog API. It is rendered at `/docs` and
//! the raw JSON is served at `/docs/openapi.json`.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    servers(
        (url = "/api", description = "Catalog API")
    ),
    paths(
        api::handlers::categories::list_categories,
        api::handlers::products::list_products,
        api::handlers::products::get_product,
        api::handlers::products::create_product,
        api::handlers::products::update_product,
        api::handlers::products::delete_product,
        api::handlers::users::list_users,
        api::handlers::users::get_user,
        api::handlers::users::create_user,
        api::handlers::users::update_user,
        api::handlers::users::delete_user,
    ),
    components(
        schemas(
            api::models::MessageResponse,
            api::models::categories::CategoryResponse,
            api::models::products::ProductPayload,
            api::models::products::ProductResponse,
            api::models::products::ProductCreated,
            api::models::users::UserPayload,
            api::models::users::UserResponse,
            api::models::users::UserCreated,
            api::models::users::CreatedUser,
        )
    ),
    tags(
        (name = "categories", description = "Product categories. The set is fixed at the database level, the API only lists it."),
        (name = "products", description = "Product catalog CRUD.

Listing supports two optional query parameters:
- `category`: numeric category id, exact match
- `search`: substring match on the product name, case-insensitive

Both can be combined. Empty parameters are treated as absent."),
        (name = "users", description = "User endpoints backed by fixture data.

Reads return a fixed roster. Writes are validated and acknowledged but never stored."),
    ),
    info(
        title = "Katalog API",
        version = "1.0.0",
        description = "REST API for a small product catalog.

## Errors

Validation failures return `400` with an `error` field listing what is wrong.
Lookups that match nothing return `404` with a `message` field. Server-side
failures return `500` with a generic `error` field, details are only logged.",
    ),
)]
pub struct ApiDoc;
