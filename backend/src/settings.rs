//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EXPERIENCES_*` environment variables or a
//! configuration file, in that order of precedence.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ListingPolicy;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_IMAGE_BUCKET: &str = "experience-images";
const DEFAULT_SIGNED_URL_TTL_SECONDS: u64 = 3600;
const DEFAULT_COLLABORATOR_TIMEOUT_MS: u64 = 5000;

/// Configuration for the experiences service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXPERIENCES")]
pub struct ExperiencesSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the Supabase project, e.g. `https://abc.supabase.co`.
    pub supabase_url: Option<String>,
    /// Anonymous API key of the Supabase project.
    pub supabase_anon_key: Option<String>,
    /// Storage bucket holding experience images.
    pub image_bucket: Option<String>,
    /// Lifetime of signed image URLs, in seconds.
    pub signed_url_ttl_seconds: Option<u64>,
    /// Upper bound for each call to Supabase, in milliseconds.
    pub collaborator_timeout_ms: Option<u64>,
}

/// Supabase project coordinates, present only when both are configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupabaseCredentials<'a> {
    pub url: &'a str,
    pub anon_key: &'a str,
}

impl ExperiencesSettings {
    /// Address to bind, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> &str {
        non_blank(self.bind_addr.as_deref()).unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Supabase project coordinates, if both the URL and key are set.
    pub fn supabase(&self) -> Option<SupabaseCredentials<'_>> {
        let url = non_blank(self.supabase_url.as_deref())?;
        let anon_key = non_blank(self.supabase_anon_key.as_deref())?;
        Some(SupabaseCredentials { url, anon_key })
    }

    /// Image bucket, falling back to `experience-images`.
    pub fn image_bucket(&self) -> &str {
        non_blank(self.image_bucket.as_deref()).unwrap_or(DEFAULT_IMAGE_BUCKET)
    }

    /// Signed URL lifetime; never shorter than one second.
    pub fn signed_url_ttl(&self) -> Duration {
        Duration::from_secs(
            self.signed_url_ttl_seconds
                .unwrap_or(DEFAULT_SIGNED_URL_TTL_SECONDS)
                .max(1),
        )
    }

    /// Per-call collaborator timeout; never shorter than one millisecond.
    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_millis(
            self.collaborator_timeout_ms
                .unwrap_or(DEFAULT_COLLABORATOR_TIMEOUT_MS)
                .max(1),
        )
    }

    /// Listing policy derived from these settings.
    pub fn listing_policy(&self) -> ListingPolicy {
        ListingPolicy {
            signed_url_ttl: self.signed_url_ttl(),
            collaborator_timeout: self.collaborator_timeout(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
