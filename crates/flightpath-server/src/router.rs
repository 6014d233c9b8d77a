//! Router assembly: routes, body limit, timeouts, CORS and tracing layers.

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::ServerConfig;
use crate::handlers::{calculate, health_check};
use crate::types::{ErrorResponse, FlightPathRequest, FlightPathResponse, HealthResponse};

/// OpenAPI documentation for the REST API.
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::flights::calculate, crate::handlers::health::health_check),
    components(schemas(FlightPathRequest, FlightPathResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "flights", description = "Itinerary endpoint resolution"),
        (name = "health", description = "Liveness probe")
    ),
    info(
        title = "Flightpath API",
        description = "Resolves the origin and final destination of an itinerary from its flight segments"
    )
)]
pub struct ApiDoc;

/// Build the application router from configuration.
#[must_use]
pub fn build_router(config: &ServerConfig) -> Router {
    let opts = &config.server_opts;

    let api_router = Router::new()
        .route("/calculate", post(calculate))
        .layer(DefaultBodyLimit::max(opts.body_limit_bytes()));

    let router = Router::new()
        .route("/health", get(health_check))
        .merge(api_router)
        .merge(docs_router());

    let router = match opts.read_timeout() {
        Some(timeout) => router.layer(RequestBodyTimeoutLayer::new(timeout)),
        None => router,
    };
    let router = match opts.write_timeout() {
        Some(timeout) => router.layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        )),
        None => router,
    };

    router
        .layer(build_cors_layer(config.cors_origin.as_deref()))
        .layer(TraceLayer::new_for_http())
}

#[cfg(feature = "swagger-ui")]
fn docs_router() -> Router {
    use utoipa_swagger_ui::SwaggerUi;
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(not(feature = "swagger-ui"))]
fn docs_router() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { axum::Json(ApiDoc::openapi()) }),
    )
}

/// Build CORS layer from the configured origin list.
///
/// `None` allows any origin.
#[must_use]
pub fn build_cors_layer(origins: Option<&str>) -> CorsLayer {
    match origins {
        Some(origins) => {
            let origin_list: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!("CORS: restricted to {} origin(s)", origin_list.len());
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origin_list))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => {
            tracing::debug!("CORS: any origin allowed. Set FLIGHTPATH_CORS_ORIGIN to restrict.");
            CorsLayer::permissive()
        }
    }
}
