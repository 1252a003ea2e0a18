//! Cross-origin headers for browser and mobile web callers.
//!
//! The listing is called from arbitrary origins with the caller's bearer
//! token, so every response advertises a permissive origin and the headers
//! the client SDK sends. Preflight requests are answered without touching
//! any port.

use actix_web::HttpResponse;
use actix_web::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use actix_web::middleware::DefaultHeaders;

/// Value of `Access-Control-Allow-Origin`.
pub const ALLOW_ORIGIN: &str = "*";
/// Value of `Access-Control-Allow-Headers`.
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Middleware adding the CORS headers to every response, errors included.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use experiences_backend::inbound::http::cors::cors_headers;
///
/// let _app = App::new().wrap(cors_headers());
/// ```
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
        .add((ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS))
}

/// Answer a CORS preflight.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}
