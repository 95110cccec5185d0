//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{films, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies API",
        version = "1.0.0",
        description = "Read-only film catalog REST API",
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Films
        films::list_films,
        films::get_film,
    ),
    components(
        schemas(
            crate::models::FilmworkDetail,
            crate::models::FilmworkType,
            crate::pagination::FilmworkPage,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "films", description = "Film catalog")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_ref(doc: &serde_json::Value, path: &str, status: &str) -> serde_json::Value {
        doc["paths"][path]["get"]["responses"][status]["content"]["application/json"]["schema"]
            ["$ref"]
            .clone()
    }

    #[test]
    fn test_error_responses_reference_detail_schema() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let expected = "#/components/schemas/ErrorResponse";

        assert_eq!(error_ref(&doc, "/films/", "400"), expected);
        assert_eq!(error_ref(&doc, "/films/{id}", "404"), expected);
        assert_eq!(error_ref(&doc, "/ready", "500"), expected);
        assert!(doc["components"]["schemas"]["ErrorResponse"]["properties"]["detail"].is_object());
    }
}
