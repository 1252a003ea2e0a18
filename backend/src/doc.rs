//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the listing endpoint, the health probes, the wire
//! schemas they use and the bearer token security scheme. The document is
//! served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::experiences::{ExperienceResponse, ExperiencesResponse};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Access token issued by the Supabase auth service."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Experiences API",
        description = "Lists experiences with short-lived image URLs for signed-in callers."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::experiences::list_experiences,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ExperiencesResponse, ExperienceResponse, ErrorResponse)),
    tags(
        (name = "experiences", description = "Experience listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
