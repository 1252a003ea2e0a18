//! Builders wiring the listing service to its collaborators.

use std::io;
use std::sync::Arc;

use actix_web::web;

use experiences_backend::domain::ExperienceListingService;
use experiences_backend::domain::ports::{
    ExperiencesQuery, FixtureExperienceRepository, FixtureIdentityProvider, FixtureImageSigner,
};
use experiences_backend::inbound::http::state::HttpState;
use experiences_backend::outbound::supabase::{
    SupabaseClient, SupabaseExperienceRepository, SupabaseIdentityProvider, SupabaseImageSigner,
};

use super::ServerConfig;
use super::config::Collaborators;

/// Build the listing use-case for `config`.
///
/// Collaborators are created once per process and shared by every worker.
///
/// # Errors
///
/// Returns [`io::Error`] when the Supabase client cannot be constructed.
pub(super) fn build_experiences_query(
    config: &ServerConfig,
) -> io::Result<Arc<dyn ExperiencesQuery>> {
    match &config.collaborators {
        Collaborators::Supabase { url, anon_key } => {
            let client = SupabaseClient::new(url, anon_key, config.policy.collaborator_timeout)
                .map_err(io::Error::other)?;
            let service = ExperienceListingService::new(
                Arc::new(SupabaseIdentityProvider::new(client.clone())),
                Arc::new(SupabaseExperienceRepository::new(client.clone())),
                Arc::new(SupabaseImageSigner::new(client, config.image_bucket.clone())),
            )
            .with_policy(config.policy);
            Ok(Arc::new(service))
        }
        Collaborators::Fixtures => {
            let service = ExperienceListingService::new(
                Arc::new(FixtureIdentityProvider),
                Arc::new(FixtureExperienceRepository),
                Arc::new(FixtureImageSigner),
            )
            .with_policy(config.policy);
            Ok(Arc::new(service))
        }
    }
}

/// Wrap the listing use-case in shared handler state.
pub(super) fn build_http_state(config: &ServerConfig) -> io::Result<web::Data<HttpState>> {
    let experiences = build_experiences_query(config)?;
    Ok(web::Data::new(HttpState::new(experiences)))
}
