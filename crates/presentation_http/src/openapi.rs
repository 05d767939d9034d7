//! OpenAPI documentation module
//!
//! Serves the OpenAPI 3 document and Swagger UI. Both paths are exempt from
//! API key authentication.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, middleware::API_KEY_HEADER, state::AppState};

/// Path of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Path of the Swagger UI
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// OpenAPI documentation for the SMHI weather gateway
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SMHI Weather Gateway API",
        description = "Latest temperature and wind gust per SMHI observation station",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "stations", description = "Merged station readings"),
        (name = "health", description = "Health check and readiness endpoints")
    ),
    paths(
        handlers::stations::get_station,
        handlers::stations::list_stations,
        handlers::health::health_check,
        handlers::health::readiness_check,
    ),
    components(
        schemas(
            handlers::stations::StationReadingResponse,
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::ServiceStatus,
            crate::error::ErrorResponse,
        )
    ),
    security(
        ("api_key" = [])
    ),
    modifiers(&SecurityAddon)
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};

            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    API_KEY_HEADER,
                    "One of the keys configured in security.api_keys",
                ))),
            );
        }
    }
}

/// Create OpenAPI documentation routes
///
/// Adds the following routes:
/// - `/api-docs/openapi.json` - OpenAPI specification (used by Swagger UI)
/// - `/swagger-ui/*` - Swagger UI interactive documentation
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}
