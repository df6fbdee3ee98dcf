//! HTTP request handlers.
//!
//! Handlers validate input, acquire a database connection, delegate to a
//! repository and shape the response. They never contain SQL.
//!
//! - [`categories`] - category listing
//! - [`products`] - product CRUD
//! - [`static_assets`] - embedded frontend serving
//! - [`users`] - fixture-backed user endpoints

use crate::errors::{Error, Result};

pub mod categories;
pub mod products;
pub mod static_assets;
pub mod users;

/// Parse a path segment into a numeric id.
///
/// Path parameters are extracted as raw strings so a non-numeric id flows
/// through the error envelope as a 400 instead of axum's plain-text rejection.
pub(crate) fn parse_id(raw: &str, resource: &'static str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| Error::InvalidId {
        resource,
        given: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "Product").unwrap(), 42);

        let error = parse_id("abc", "Product").unwrap_err();
        assert!(matches!(error, Error::InvalidId { given, .. } if given == "abc"));
    }
}
