//! API models for users.
//!
//! The user endpoints are a placeholder backed by fixtures, so these models
//! never touch the database layer. The write payload still validates like the
//! product one so clients get the same 400 contract.

use crate::errors::{Error, Result};
use crate::types::UserId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Field list quoted in the 400 response when a user payload is incomplete
pub const USER_REQUIRED_FIELDS: &str = "name, email, password";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: UserId,
    #[schema(example = "Ivan")]
    pub name: String,
    #[schema(example = "ivan@example.com")]
    pub email: String,
}

/// Write payload for creating or updating a user.
///
/// All fields are required. The password is checked for presence and then
/// discarded, nothing is stored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserPayload {
    #[schema(example = "Marta")]
    pub name: Option<String>,
    #[schema(example = "marta@example.com")]
    pub email: Option<String>,
    #[schema(example = "hunter2")]
    pub password: Option<String>,
}

/// A validated user write, with the password already dropped
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl UserPayload {
    pub fn validate(self) -> Result<NewUser> {
        let (Some(name), Some(email), Some(_password)) = (
            required(self.name),
            required(self.email),
            required(self.password),
        ) else {
            return Err(Error::MissingFields {
                required: USER_REQUIRED_FIELDS,
            });
        };

        Ok(NewUser { name, email })
    }
}

/// Echo of an accepted user create
#[derive(Debug, Serialize, ToSchema)]
pub struct UserCreated {
    #[schema(example = "User created successfully")]
    pub message: String,
    pub user: CreatedUser,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedUser {
    #[schema(example = "Marta")]
    pub name: String,
    #[schema(example = "marta@example.com")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_all_fields() {
        let payload = UserPayload {
            name: Some("Marta".to_string()),
            email: Some("marta@example.com".to_string()),
            password: None,
        };
        assert!(matches!(payload.validate(), Err(Error::MissingFields { .. })));

        let payload = UserPayload {
            name: Some("Marta".to_string()),
            email: Some(String::new()),
            password: Some("hunter2".to_string()),
        };
        assert!(matches!(payload.validate(), Err(Error::MissingFields { .. })));
    }

    #[test]
    fn test_validate_drops_the_password() {
        let payload = UserPayload {
            name: Some("Marta".to_string()),
            email: Some("marta@example.com".to_string()),
            password: Some("hunter2".to_string()),
        };

        let user = payload.validate().expect("payload should be valid");
        assert_eq!(user.name, "Marta");
        assert_eq!(user.email, "marta@example.com");
    }
}
