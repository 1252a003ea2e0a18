//! Experience listing HTTP handlers.
//!
//! ```text
//! OPTIONS /get-experiences
//! GET     /get-experiences   Authorization: Bearer <token>
//! POST    /get-experiences   Authorization: Bearer <token>
//! ```
//!
//! GET and POST behave identically; the body of a POST is ignored.

use actix_web::http::Method;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EnrichedExperience, Error, ExperienceListing};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::bearer_token;
use crate::inbound::http::cors::preflight;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;

/// Path the listing is mounted on.
pub const EXPERIENCES_PATH: &str = "/get-experiences";

/// One experience as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceResponse {
    #[schema(example = "7d4c2a4e-3f0b-4c8e-9a57-2f1b1d4c9e10")]
    pub id: String,
    #[schema(example = "Sunrise on Arthur's Seat")]
    pub title: Option<String>,
    #[schema(example = "outdoors")]
    pub category: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Time-limited URL for the experience image; `null` when there is no
    /// image or it could not be signed.
    pub image_url: Option<String>,
}

impl From<EnrichedExperience> for ExperienceResponse {
    fn from(value: EnrichedExperience) -> Self {
        let EnrichedExperience {
            id,
            title,
            category,
            latitude,
            longitude,
            image_url,
        } = value;
        Self {
            id,
            title,
            category,
            latitude,
            longitude,
            image_url,
        }
    }
}

/// Successful listing envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExperiencesResponse {
    /// Experiences, newest first.
    pub data: Vec<ExperienceResponse>,
    /// Number of entries in `data`.
    pub count: usize,
}

impl From<ExperienceListing> for ExperiencesResponse {
    fn from(value: ExperienceListing) -> Self {
        let data: Vec<ExperienceResponse> = value
            .into_experiences()
            .into_iter()
            .map(ExperienceResponse::from)
            .collect();
        Self {
            count: data.len(),
            data,
        }
    }
}

/// List every experience visible to the caller, newest first, with signed
/// image URLs.
#[utoipa::path(
    method(get, post),
    path = "/get-experiences",
    description = "Authenticate the bearer token, then list experiences newest first. \
        Images that cannot be signed are returned with a null `image_url`.",
    params(
        ("Authorization" = String, Header, description = "Bearer access token")
    ),
    responses(
        (status = 200, description = "Experiences", body = ExperiencesResponse),
        (status = 401, description = "Missing or rejected token", body = ErrorResponse),
        (status = 500, description = "Listing could not be produced", body = ErrorResponse)
    ),
    tags = ["experiences"],
    operation_id = "getExperiences"
)]
pub async fn list_experiences(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let token = bearer_token(&request)?;
    let listing = state.experiences.list_experiences(&token).await?;
    let body = serde_json::to_string(&ExperiencesResponse::from(listing)).map_err(|err| {
        Error::internal("failed to encode experiences").with_details(err.to_string())
    })?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

/// Mount the listing routes.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use experiences_backend::inbound::http::experiences::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(EXPERIENCES_PATH)
            .route(web::method(Method::OPTIONS).to(preflight))
            .route(web::get().to(list_experiences))
            .route(web::post().to(list_experiences)),
    );
}

#[cfg(test)]
#[path = "experiences_tests.rs"]
mod tests;
