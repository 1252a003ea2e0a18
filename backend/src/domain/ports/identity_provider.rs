//! Driven port for resolving bearer tokens into user identities.
//!
//! The listing only needs to know whether a token belongs to a signed-in
//! user. Rejections and provider outages are kept apart so the service can
//! answer 401 for the former and 500 for the latter.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{BearerToken, UserIdentity};

define_port_error! {
    /// Errors surfaced while verifying a bearer token.
    pub enum IdentityProviderError {
        /// The provider considered the token invalid or expired.
        Rejected { message: String } =>
            "identity provider rejected token: {message}",
        /// Network transport failed before a usable response arrived.
        Transport { message: String } =>
            "identity provider transport failed: {message}",
        /// The provider did not answer within the configured bound.
        Timeout { message: String } =>
            "identity provider timeout: {message}",
        /// The provider response could not be decoded.
        Decode { message: String } =>
            "identity provider response decode failed: {message}",
    }
}

impl IdentityProviderError {
    /// Return whether the failure means "not signed in" rather than an outage.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Port for verifying caller credentials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve `token` to the identity it was issued for.
    ///
    /// `Ok(None)` means the provider answered but knows no user for the token.
    async fn verify_token(
        &self,
        token: &BearerToken,
    ) -> Result<Option<UserIdentity>, IdentityProviderError>;
}

/// Token accepted by [`FixtureIdentityProvider`].
pub const FIXTURE_ACCESS_TOKEN: &str = "fixture-access-token";

/// Fixture provider used when no identity backend is configured.
///
/// Accepts [`FIXTURE_ACCESS_TOKEN`] only.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityProvider;

#[async_trait]
impl IdentityProvider for FixtureIdentityProvider {
    async fn verify_token(
        &self,
        token: &BearerToken,
    ) -> Result<Option<UserIdentity>, IdentityProviderError> {
        if token.as_str() == FIXTURE_ACCESS_TOKEN {
            Ok(Some(UserIdentity::new(
                "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                Some("ada@example.com".to_owned()),
            )))
        } else {
            Ok(None)
        }
    }
}
