//! Bearer credential extraction for HTTP handlers.
//!
//! Every way an `Authorization` header can fail to carry a usable bearer
//! token collapses into the same 401 the identity provider would produce,
//! so callers cannot distinguish "missing" from "rejected".

use actix_web::HttpRequest;
use actix_web::http::header::AUTHORIZATION;
use tracing::warn;

use crate::domain::{BearerToken, Error, UNAUTHORIZED_MESSAGE};

use super::ApiResult;

/// Extract the caller's bearer token or fail with the listing's 401.
pub fn bearer_token(request: &HttpRequest) -> ApiResult<BearerToken> {
    let header = match request.headers().get(AUTHORIZATION).map(|v| v.to_str()) {
        Some(Ok(value)) => Some(value),
        Some(Err(_)) => {
            warn!("authorization header is not valid ASCII");
            return Err(Error::unauthorized(UNAUTHORIZED_MESSAGE));
        }
        None => None,
    };

    BearerToken::from_authorization_header(header).map_err(|err| {
        warn!(reason = %err, "request carries no usable bearer token");
        Error::unauthorized(UNAUTHORIZED_MESSAGE)
    })
}
