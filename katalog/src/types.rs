//! Type aliases used throughout the application.

/// Product identifier (database-generated row id)
pub type ProductId = i64;
/// Category identifier (database-generated row id)
pub type CategoryId = i64;
/// User identifier (fixture id in the non-persistent user resource)
pub type UserId = i64;
