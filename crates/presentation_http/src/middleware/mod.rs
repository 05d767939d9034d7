//! HTTP middleware components
//!
//! API key authentication and request correlation.

pub mod auth;
pub mod request_id;

pub use auth::{API_KEY_HEADER, ApiKeyAuth, ApiKeyAuthLayer};
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
