//! Experience listing domain service.
//!
//! Implements [`ExperiencesQuery`] in three phases:
//!
//! 1. authenticate the bearer token (hard gate, 401 on rejection);
//! 2. query every record newest first (fatal on failure);
//! 3. resolve each image into a signed URL concurrently, degrading any
//!    per-record failure to "no image".
//!
//! Every collaborator call is bounded by [`ListingPolicy::collaborator_timeout`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;
use tracing::{debug, error, warn};

use crate::domain::ports::{
    ExperienceRepository, ExperienceRepositoryError, ExperiencesQuery, IdentityProvider,
    IdentityProviderError, ImageSigner, ImageSignerError,
};
use crate::domain::{
    BearerToken, EnrichedExperience, Error, ExperienceListing, ExperienceRecord, ImagePath,
    ImageResolution, UNAUTHORIZED_MESSAGE, UserIdentity,
};

/// Lifetime of issued image URLs unless configured otherwise.
pub const DEFAULT_SIGNED_URL_TTL: Duration = Duration::from_secs(3600);
/// Upper bound for any single collaborator call unless configured otherwise.
pub const DEFAULT_COLLABORATOR_TIMEOUT: Duration = Duration::from_secs(5);

/// Tunables for the listing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingPolicy {
    /// Validity period requested for each signed image URL.
    pub signed_url_ttl: Duration,
    /// Upper bound applied to each identity, query and signing call.
    pub collaborator_timeout: Duration,
}

impl Default for ListingPolicy {
    fn default() -> Self {
        Self {
            signed_url_ttl: DEFAULT_SIGNED_URL_TTL,
            collaborator_timeout: DEFAULT_COLLABORATOR_TIMEOUT,
        }
    }
}

/// Listing service implementing the [`ExperiencesQuery`] driving port.
#[derive(Clone)]
pub struct ExperienceListingService<A, R, S> {
    identity: Arc<A>,
    repository: Arc<R>,
    signer: Arc<S>,
    policy: ListingPolicy,
}

impl<A, R, S> ExperienceListingService<A, R, S> {
    /// Create a service over the three collaborators with the default policy.
    pub fn new(identity: Arc<A>, repository: Arc<R>, signer: Arc<S>) -> Self {
        Self {
            identity,
            repository,
            signer,
            policy: ListingPolicy::default(),
        }
    }

    /// Replace the listing policy.
    pub fn with_policy(mut self, policy: ListingPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<A, R, S> ExperienceListingService<A, R, S>
where
    A: IdentityProvider,
    R: ExperienceRepository,
    S: ImageSigner,
{
    async fn authenticate(&self, token: &BearerToken) -> Result<UserIdentity, Error> {
        let verified = bounded(
            self.policy.collaborator_timeout,
            self.identity.verify_token(token),
            IdentityProviderError::timeout,
        )
        .await;

        match verified {
            Ok(Some(identity)) => Ok(identity),
            Ok(None) => {
                warn!("bearer token resolved to no user");
                Err(Error::unauthorized(UNAUTHORIZED_MESSAGE))
            }
            Err(err) if err.is_rejection() => {
                warn!(error = %err, "bearer token rejected");
                Err(Error::unauthorized(UNAUTHORIZED_MESSAGE))
            }
            Err(err) => {
                error!(error = %err, "identity provider unavailable");
                Err(Error::internal("identity provider unavailable").with_details(err.to_string()))
            }
        }
    }

    async fn query(&self, token: &BearerToken) -> Result<Vec<ExperienceRecord>, Error> {
        bounded(
            self.policy.collaborator_timeout,
            self.repository.list_newest_first(token),
            ExperienceRepositoryError::timeout,
        )
        .await
        .map_err(|err| {
            error!(error = %err, "experience query failed");
            Error::upstream_query("failed to query experiences").with_details(err.to_string())
        })
    }

    async fn resolve_image(&self, path: Option<&ImagePath>, token: &BearerToken) -> ImageResolution {
        let Some(path) = path else {
            return ImageResolution::NoImage;
        };

        let signed = bounded(
            self.policy.collaborator_timeout,
            self.signer.sign(path, self.policy.signed_url_ttl, token),
            ImageSignerError::timeout,
        )
        .await;

        match signed {
            Ok(Some(url)) => ImageResolution::Signed(url),
            Ok(None) => ImageResolution::NoImage,
            Err(err) => {
                warn!(image_path = %path, error = %err, "failed to sign image URL");
                ImageResolution::Failed(err)
            }
        }
    }

    async fn enrich(
        &self,
        records: Vec<ExperienceRecord>,
        token: &BearerToken,
    ) -> Vec<EnrichedExperience> {
        // join_all yields results in input order, whatever order they finish in.
        let resolutions = join_all(
            records
                .iter()
                .map(|record| self.resolve_image(record.image_path.as_ref(), token)),
        )
        .await;

        records
            .into_iter()
            .zip(resolutions)
            .map(|(record, image)| EnrichedExperience::from_record(record, image))
            .collect()
    }
}

#[async_trait]
impl<A, R, S> ExperiencesQuery for ExperienceListingService<A, R, S>
where
    A: IdentityProvider,
    R: ExperienceRepository,
    S: ImageSigner,
{
    async fn list_experiences(&self, token: &BearerToken) -> Result<ExperienceListing, Error> {
        let identity = self.authenticate(token).await?;
        let records = self.query(token).await?;
        debug!(
            user_id = identity.id(),
            records = records.len(),
            "enriching experiences"
        );
        let experiences = self.enrich(records, token).await;
        Ok(ExperienceListing::new(experiences))
    }
}

/// Await `fut` for at most `limit`, turning expiry into the port's timeout error.
async fn bounded<T, E, Fut>(
    limit: Duration,
    fut: Fut,
    on_timeout: impl FnOnce(String) -> E,
) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(on_timeout(format!(
            "no response within {}ms",
            limit.as_millis()
        ))),
    }
}

#[cfg(test)]
#[path = "experience_listing_service_tests.rs"]
mod tests;
