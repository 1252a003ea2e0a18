//! HTTP server configuration object and helpers.

use std::io;
use std::net::SocketAddr;

use tracing::warn;

use experiences_backend::domain::ListingPolicy;
use experiences_backend::settings::ExperiencesSettings;

/// Where the listing's collaborators live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Collaborators {
    /// A hosted Supabase project.
    Supabase { url: String, anon_key: String },
    /// In-memory fixtures for local development.
    Fixtures,
}

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) collaborators: Collaborators,
    pub(crate) image_bucket: String,
    pub(crate) policy: ListingPolicy,
}

impl ServerConfig {
    /// Resolve settings into a server configuration.
    ///
    /// Without Supabase credentials, debug builds fall back to fixture
    /// collaborators; release builds refuse to start.
    ///
    /// # Errors
    ///
    /// Returns [`io::Error`] when the bind address does not parse or when a
    /// release build has no Supabase credentials.
    pub fn from_settings(settings: &ExperiencesSettings) -> io::Result<Self> {
        Self::resolve(settings, cfg!(debug_assertions))
    }

    pub(crate) fn resolve(settings: &ExperiencesSettings, allow_fixtures: bool) -> io::Result<Self> {
        let bind_addr: SocketAddr = settings.bind_addr().parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bind address {}: {err}", settings.bind_addr()),
            )
        })?;

        let collaborators = match settings.supabase() {
            Some(credentials) => Collaborators::Supabase {
                url: credentials.url.to_owned(),
                anon_key: credentials.anon_key.to_owned(),
            },
            None if allow_fixtures => {
                warn!("Supabase is not configured; serving fixture experiences (dev only)");
                Collaborators::Fixtures
            }
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "EXPERIENCES_SUPABASE_URL and EXPERIENCES_SUPABASE_ANON_KEY must be set",
                ));
            }
        };

        Ok(Self {
            bind_addr,
            collaborators,
            image_bucket: settings.image_bucket().to_owned(),
            policy: settings.listing_policy(),
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
