//! Database layer.
//!
//! Everything that touches SQLite lives under this module. The split mirrors
//! the API layer: `models` holds the request/response structs the repositories
//! speak, `handlers` holds the repositories themselves, and `errors` maps
//! driver failures onto the error cases the rest of the application matches on.
//!
//! Column names in the schema keep the original inventory naming
//! (`naziv`, `sastojci`, `uputa`, `kategorija_id`, `slika_url`); every query
//! aliases them to the English names the models use, so nothing above this
//! module ever sees the legacy spelling.

pub mod errors;
pub mod handlers;
pub mod models;
