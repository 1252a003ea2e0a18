//! Driven port for issuing time-boxed image URLs.
//!
//! Every error here is recoverable from the listing's point of view: the
//! affected experience is returned with no image.

use std::time::Duration;

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{BearerToken, ImagePath};

define_port_error! {
    /// Errors surfaced while signing one image URL.
    pub enum ImageSignerError {
        /// The object does not exist in the bucket.
        NotFound { message: String } =>
            "image object not found: {message}",
        /// The blob store refused to sign the object for this caller.
        Rejected { message: String } =>
            "image signing rejected: {message}",
        /// Network transport failed before a usable response arrived.
        Transport { message: String } =>
            "image signing transport failed: {message}",
        /// The blob store did not answer within the configured bound.
        Timeout { message: String } =>
            "image signing timeout: {message}",
        /// The signing response could not be decoded.
        Decode { message: String } =>
            "image signing response decode failed: {message}",
    }
}

/// Port for creating signed URLs for private experience images.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageSigner: Send + Sync {
    /// Sign `path` so it can be fetched without credentials for `expires_in`.
    ///
    /// `Ok(None)` means the store answered without a URL; the listing treats
    /// that like a missing image.
    async fn sign(
        &self,
        path: &ImagePath,
        expires_in: Duration,
        token: &BearerToken,
    ) -> Result<Option<String>, ImageSignerError>;
}

/// Fixture signer producing deterministic, non-resolvable URLs.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureImageSigner;

#[async_trait]
impl ImageSigner for FixtureImageSigner {
    async fn sign(
        &self,
        path: &ImagePath,
        expires_in: Duration,
        _token: &BearerToken,
    ) -> Result<Option<String>, ImageSignerError> {
        Ok(Some(format!(
            "https://storage.fixture.invalid/experience-images/{path}?expires_in={}",
            expires_in.as_secs()
        )))
    }
}
