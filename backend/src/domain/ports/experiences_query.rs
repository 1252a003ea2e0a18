//! Driving port for the experience listing use-case.
//!
//! Inbound adapters call this port once they hold a well-formed bearer
//! token. Handler tests substitute a mock so they stay free of I/O.

use async_trait::async_trait;

use crate::domain::{BearerToken, Error, ExperienceListing};

/// Domain use-case port for listing experiences.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperiencesQuery: Send + Sync {
    /// Authenticate `token`, then return every experience newest first with
    /// image URLs resolved.
    async fn list_experiences(&self, token: &BearerToken) -> Result<ExperienceListing, Error>;
}
