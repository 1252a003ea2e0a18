//! Domain ports and supporting types for the hexagonal boundary.
//!
//! The listing is driven through [`ExperiencesQuery`] and drives three
//! external collaborators: [`IdentityProvider`], [`ExperienceRepository`]
//! and [`ImageSigner`].

mod macros;
pub(crate) use macros::define_port_error;

mod experience_repository;
mod experiences_query;
mod identity_provider;
mod image_signer;

#[cfg(test)]
pub use experience_repository::MockExperienceRepository;
pub use experience_repository::{
    ExperienceRepository, ExperienceRepositoryError, FixtureExperienceRepository,
};
#[cfg(test)]
pub use experiences_query::MockExperiencesQuery;
pub use experiences_query::ExperiencesQuery;
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{
    FIXTURE_ACCESS_TOKEN, FixtureIdentityProvider, IdentityProvider, IdentityProviderError,
};
#[cfg(test)]
pub use image_signer::MockImageSigner;
pub use image_signer::{FixtureImageSigner, ImageSigner, ImageSignerError};
