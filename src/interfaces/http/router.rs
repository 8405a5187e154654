//! API Router with Swagger UI

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::health::{self, ComponentHealth, HealthResponse};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics};
use super::modules::request_id::request_id_middleware;
use super::modules::{credentials, locations, organizations, sessions, tokens};
use super::state::HubState;
use crate::application::OCPI_VERSION_PATH;
use crate::domain::location::{Connector, Evse, GeoLocation};
use crate::domain::{Location, Role, Session, SessionStatus, Token, TokenType};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Party token issued at registration"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        organizations::register_organization,
        organizations::list_organizations,
        organizations::get_organization,
        credentials::get_credentials,
        credentials::post_credentials,
        locations::list_locations,
        locations::put_location,
        sessions::list_sessions,
        tokens::list_tokens,
    ),
    components(
        schemas(
            ApiResponse<String>,
            HealthResponse,
            ComponentHealth,
            Role,
            organizations::OrganizationDto,
            organizations::RegisterOrganizationRequest,
            credentials::CredentialsDto,
            credentials::CredentialsRoleDto,
            Location,
            Evse,
            Connector,
            GeoLocation,
            Session,
            SessionStatus,
            Token,
            TokenType,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Organizations", description = "Party registration and directory"),
        (name = "Credentials", description = "OCPI credentials handshake"),
        (name = "Locations", description = "OCPI Locations module"),
        (name = "Sessions", description = "OCPI Sessions module"),
        (name = "Tokens", description = "OCPI Tokens module"),
    ),
    info(
        title = "OCPI Hub API",
        version = "2.3.0",
        description = "Hub mediating OCPI 2.3.0 exchange between CPOs and eMSPs",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `/metrics` is mounted only when a Prometheus recorder handle is given.
pub fn create_api_router(state: HubState, metrics: Option<PrometheusHandle>) -> Router {
    let ocpi_routes = Router::new()
        .route(
            "/credentials",
            get(credentials::get_credentials).post(credentials::post_credentials),
        )
        .route(
            "/locations",
            get(locations::list_locations).post(locations::put_location),
        )
        .route("/sessions", get(sessions::list_sessions))
        .route("/tokens", get(tokens::list_tokens));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .route(
            "/organizations/register",
            post(organizations::register_organization),
        )
        .route("/organizations", get(organizations::list_organizations))
        .route("/organizations/{id}", get(organizations::get_organization))
        .nest(OCPI_VERSION_PATH, ocpi_routes)
        .with_state(state);

    if let Some(handle) = metrics {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(handle),
        );
    }

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}
