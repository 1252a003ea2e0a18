//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::ExperiencesQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub experiences: Arc<dyn ExperiencesQuery>,
}

impl HttpState {
    /// Construct state around the listing use-case.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use experiences_backend::domain::ExperienceListingService;
    /// use experiences_backend::domain::ports::{
    ///     FixtureExperienceRepository, FixtureIdentityProvider, FixtureImageSigner,
    /// };
    /// use experiences_backend::inbound::http::state::HttpState;
    ///
    /// let service = ExperienceListingService::new(
    ///     Arc::new(FixtureIdentityProvider),
    ///     Arc::new(FixtureExperienceRepository),
    ///     Arc::new(FixtureImageSigner),
    /// );
    /// let state = HttpState::new(Arc::new(service));
    /// let _experiences = state.experiences.clone();
    /// ```
    pub fn new(experiences: Arc<dyn ExperiencesQuery>) -> Self {
        Self { experiences }
    }
}
