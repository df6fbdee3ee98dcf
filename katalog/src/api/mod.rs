//! API layer for HTTP request handling and data models.
//!
//! This module contains the REST API implementation, organized into:
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # API Structure
//!
//! Everything is mounted under `/api`:
//!
//! - **Categories** (`/api/categories`): Read-only category listing
//! - **Products** (`/api/products/*`): Product CRUD with filtered listing
//! - **Users** (`/api/users/*`): Fixture-backed user endpoints
//!
//! Requests and routes outside `/api` fall through to the embedded frontend.
//!
//! # OpenAPI Documentation
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`.
//! API documentation is available at `/docs` when the server is running.

pub mod handlers;
pub mod models;
