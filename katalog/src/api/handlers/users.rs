//! User endpoints.
//!
//! These are a placeholder for an account system that never landed. They
//! serve a fixed in-memory roster and acknowledge writes without storing
//! anything, so the frontend can exercise the flows against stable data.
//! Validation and the error envelope behave exactly like the product
//! endpoints.

use crate::api::handlers::parse_id;
use crate::api::models::users::{CreatedUser, UserCreated, UserPayload, UserResponse};
use crate::api::models::MessageResponse;
use crate::errors::{Error, Result};
use crate::types::UserId;
use axum::{extract::Path, http::StatusCode, Json};

const FIXTURE_USERS: [(UserId, &str, &str); 2] = [
    (1, "Ivan", "ivan@example.com"),
    (2, "Ana", "ana@example.com"),
];

fn fixture_users() -> Vec<UserResponse> {
    FIXTURE_USERS
        .iter()
        .map(|(id, name, email)| UserResponse {
            id: *id,
            name: name.to_string(),
            email: email.to_string(),
        })
        .collect()
}

fn fixture_by_id(id: UserId) -> Option<UserResponse> {
    fixture_users().into_iter().find(|user| user.id == id)
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>)
    ),
    tag = "users"
)]
#[tracing::instrument(skip_all)]
pub async fn list_users() -> Json<Vec<UserResponse>> {
    Json(fixture_users())
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
#[tracing::instrument(skip_all)]
pub async fn get_user(Path(id): Path<String>) -> Result<Json<UserResponse>> {
    let id = parse_id(&id, "User")?;

    let user = fixture_by_id(id).ok_or(Error::NotFound { resource: "User" })?;

    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User accepted", body = UserCreated),
        (status = 400, description = "Missing required fields")
    ),
    tag = "users"
)]
#[tracing::instrument(skip_all)]
pub async fn create_user(Json(payload): Json<UserPayload>) -> Result<(StatusCode, Json<UserCreated>)> {
    let user = payload.validate()?;

    // Acknowledged but not stored
    Ok((
        StatusCode::CREATED,
        Json(UserCreated {
            message: "User created successfully".to_string(),
            user: CreatedUser {
                name: user.name,
                email: user.email,
            },
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User update accepted", body = MessageResponse),
        (status = 400, description = "Invalid ID or missing required fields"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
#[tracing::instrument(skip_all)]
pub async fn update_user(
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id, "User")?;
    payload.validate()?;

    if fixture_by_id(id).is_none() {
        return Err(Error::NotFound { resource: "User" });
    }

    Ok(Json(MessageResponse::new("User updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User delete accepted", body = MessageResponse),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
#[tracing::instrument(skip_all)]
pub async fn delete_user(Path(id): Path<String>) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id, "User")?;

    if fixture_by_id(id).is_none() {
        return Err(Error::NotFound { resource: "User" });
    }

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
