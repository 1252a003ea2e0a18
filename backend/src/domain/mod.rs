//! Domain primitives, ports and services.
//!
//! Purpose: model the experience listing independently of HTTP and of the
//! hosted platform that stores records and images. Adapters in `inbound`
//! and `outbound` talk to the domain only through the traits in [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - BearerToken / UserIdentity: caller credentials and who they belong to.
//! - ExperienceRecord / EnrichedExperience / ExperienceListing: the
//!   listing as stored and as returned.
//! - ExperienceListingService: the use-case behind `ExperiencesQuery`.

pub mod auth;
pub mod error;
pub mod experience;
pub mod experience_listing_service;
pub mod ports;
pub mod trace_id;

pub use self::auth::{BearerToken, BearerTokenError, UNAUTHORIZED_MESSAGE, UserIdentity};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::experience::{
    EnrichedExperience, ExperienceListing, ExperienceRecord, ImagePath, ImageResolution,
};
pub use self::experience_listing_service::{
    DEFAULT_COLLABORATOR_TIMEOUT, DEFAULT_SIGNED_URL_TTL, ExperienceListingService, ListingPolicy,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use experiences_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("Unauthorized - Please sign in"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
