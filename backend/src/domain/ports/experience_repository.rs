//! Driven port for reading experience records.
//!
//! The store owns ordering: implementations must return records newest
//! first by `created_at` and the listing never reorders them.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{BearerToken, ExperienceRecord, ImagePath};

define_port_error! {
    /// Errors raised while querying the record store.
    pub enum ExperienceRepositoryError {
        /// The store answered with an error for the query.
        Query { message: String } =>
            "experience query failed: {message}",
        /// Network transport failed before a usable response arrived.
        Transport { message: String } =>
            "experience store transport failed: {message}",
        /// The store did not answer within the configured bound.
        Timeout { message: String } =>
            "experience store timeout: {message}",
        /// Rows could not be decoded into experience records.
        Decode { message: String } =>
            "experience rows decode failed: {message}",
    }
}

/// Port for listing every experience visible to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Return all experiences ordered by `created_at` descending.
    ///
    /// The caller's token is forwarded so store-side access policies apply.
    async fn list_newest_first(
        &self,
        token: &BearerToken,
    ) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError>;
}

/// Fixture repository returning two canned experiences, one with an image.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureExperienceRepository;

#[async_trait]
impl ExperienceRepository for FixtureExperienceRepository {
    async fn list_newest_first(
        &self,
        _token: &BearerToken,
    ) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
        Ok(vec![
            ExperienceRecord {
                id: "0d3c6a43-5b1f-4f0e-9f59-2f8a1c7d9e01".to_owned(),
                title: Some("Arthur's Seat sunrise".to_owned()),
                category: Some("hike".to_owned()),
                latitude: Some(55.9441),
                longitude: Some(-3.1618),
                image_path: ImagePath::from_optional(Some("fixtures/arthurs-seat.jpg".to_owned())),
            },
            ExperienceRecord {
                id: "6b1f2c9e-7a44-4d1b-8c0e-3e5d2a9b7f02".to_owned(),
                title: Some("Leith food market".to_owned()),
                category: Some("food".to_owned()),
                latitude: Some(55.9756),
                longitude: Some(-3.1702),
                image_path: None,
            },
        ])
    }
}
