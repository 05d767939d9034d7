//! API key authentication middleware
//!
//! Validates the `X-API-Key` header against the configured allow-list using
//! constant-time comparison. Documentation paths are served without a key.
//!
//! An empty allow-list rejects every protected request.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use secrecy::{ExposeSecret, SecretString};
use subtle::{Choice, ConstantTimeEq};
use tower::{Layer, Service};
use tracing::debug;

use crate::error::ApiError;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Response message when the header is absent
pub const MISSING_API_KEY: &str = "API Key is missing";

/// Response message when the key is not in the allow-list
pub const INVALID_API_KEY: &str = "Invalid API Key";

/// Allow-list of accepted API keys
#[derive(Debug, Default)]
pub struct ApiKeyStore {
    keys: Vec<SecretString>,
}

impl ApiKeyStore {
    /// Create a store from configured keys, ignoring blank entries
    pub fn from_keys(keys: Vec<SecretString>) -> Self {
        Self {
            keys: keys
                .into_iter()
                .filter(|k| !k.expose_secret().trim().is_empty())
                .collect(),
        }
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Check whether `candidate` matches any configured key
    ///
    /// Every configured key is compared, so the time taken does not reveal
    /// which entry matched.
    pub fn verify(&self, candidate: &str) -> bool {
        let matched = self.keys.iter().fold(Choice::from(0), |acc, key| {
            acc | key.expose_secret().as_bytes().ct_eq(candidate.as_bytes())
        });
        matched.into()
    }
}

/// Layer that applies API key authentication
#[derive(Clone, Debug)]
pub struct ApiKeyAuthLayer {
    api_key_store: Arc<ApiKeyStore>,
    excluded_paths: Arc<[String]>,
}

impl ApiKeyAuthLayer {
    /// Create a new auth layer from the configured keys
    ///
    /// Documentation paths (`/swagger-ui`, `/api-docs`) are excluded by default.
    pub fn new(keys: Vec<SecretString>) -> Self {
        Self {
            api_key_store: Arc::new(ApiKeyStore::from_keys(keys)),
            excluded_paths: Arc::from(vec!["/swagger-ui".to_string(), "/api-docs".to_string()]),
        }
    }

    /// Replace the paths served without authentication
    #[must_use]
    pub fn with_excluded_paths(mut self, paths: Vec<String>) -> Self {
        self.excluded_paths = Arc::from(paths);
        self
    }

    /// Check if the layer has any usable key
    pub fn has_keys(&self) -> bool {
        !self.api_key_store.is_empty()
    }
}

impl<S> Layer<S> for ApiKeyAuthLayer {
    type Service = ApiKeyAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ApiKeyAuth {
            inner,
            api_key_store: Arc::clone(&self.api_key_store),
            excluded_paths: Arc::clone(&self.excluded_paths),
        }
    }
}

/// Middleware service for API key authentication
#[derive(Clone, Debug)]
pub struct ApiKeyAuth<S> {
    inner: S,
    api_key_store: Arc<ApiKeyStore>,
    excluded_paths: Arc<[String]>,
}

/// Whether `path` equals `prefix` or lies below it
fn is_under(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

impl<S> Service<Request> for ApiKeyAuth<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let api_key_store = Arc::clone(&self.api_key_store);
        let excluded_paths = Arc::clone(&self.excluded_paths);
        // Take the service that was driven to readiness, leave a fresh clone behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let path = req.uri().path();
            if excluded_paths.iter().any(|p| is_under(path, p)) {
                return inner.call(req).await;
            }

            let Some(header) = req.headers().get(API_KEY_HEADER) else {
                debug!(path = %path, "Request without API key rejected");
                return Ok(unauthorized_response(MISSING_API_KEY));
            };

            let valid = header
                .to_str()
                .is_ok_and(|candidate| api_key_store.verify(candidate));
            if !valid {
                debug!(path = %path, "Request with unknown API key rejected");
                return Ok(unauthorized_response(INVALID_API_KEY));
            }

            inner.call(req).await
        })
    }
}

fn unauthorized_response(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}
