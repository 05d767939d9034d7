//! SMHI weather gateway HTTP presentation layer
//!
//! Routes, handlers, middleware and OpenAPI documentation for the
//! station reading API.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{ApiKeyAuthLayer, RequestIdLayer};
pub use routes::{create_app, create_router};
pub use state::AppState;
