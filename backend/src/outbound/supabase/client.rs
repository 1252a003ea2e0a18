//! Shared HTTP plumbing for the Supabase adapters.
//!
//! Owns the reqwest client, the project base URL and the anonymous API key.
//! Every request carries the project `apikey` plus the caller's bearer token
//! so row-level security and storage policies are evaluated as the caller.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use thiserror::Error;
use url::Url;
use zeroize::Zeroizing;

use crate::domain::BearerToken;

const APIKEY_HEADER: &str = "apikey";
const USER_AGENT: &str = concat!("experiences-backend/", env!("CARGO_PKG_VERSION"));

/// Errors raised while building a [`SupabaseClient`].
#[derive(Debug, Error)]
pub enum SupabaseClientError {
    /// The project URL is not an absolute `http(s)` URL.
    #[error("invalid Supabase project URL {url}: {reason}")]
    InvalidProjectUrl { url: String, reason: String },
    /// The anonymous API key was blank.
    #[error("Supabase anon key must not be empty")]
    EmptyAnonKey,
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Connection to one Supabase project.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    project_url: Url,
    anon_key: Zeroizing<String>,
}

impl SupabaseClient {
    /// Build a client for `project_url` whose requests give up after
    /// `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is not an absolute `http(s)` URL, the
    /// key is blank, or the reqwest client cannot be constructed.
    pub fn new(
        project_url: &str,
        anon_key: &str,
        timeout: Duration,
    ) -> Result<Self, SupabaseClientError> {
        let invalid = |reason: &str| SupabaseClientError::InvalidProjectUrl {
            url: project_url.to_owned(),
            reason: reason.to_owned(),
        };
        let project_url = Url::parse(project_url).map_err(|err| invalid(&err.to_string()))?;
        if !matches!(project_url.scheme(), "http" | "https") || project_url.cannot_be_a_base() {
            return Err(invalid("expected an absolute http(s) URL"));
        }
        if anon_key.trim().is_empty() {
            return Err(SupabaseClientError::EmptyAnonKey);
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            project_url,
            anon_key: Zeroizing::new(anon_key.trim().to_owned()),
        })
    }

    /// Project URL with `segments` appended as percent-encoded path segments.
    pub(super) fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.project_url.clone();
        url.set_query(None);
        // `new` rejects cannot-be-a-base URLs, so segments are always available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Absolute storage URL for a path the storage API returned relative to
    /// its own root.
    pub(super) fn storage_url(&self, relative: &str) -> String {
        if relative.starts_with("http://") || relative.starts_with("https://") {
            return relative.to_owned();
        }
        let base = self.endpoint(["storage", "v1"]);
        format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            relative.trim_start_matches('/')
        )
    }

    pub(super) fn get(&self, url: Url, token: &BearerToken) -> RequestBuilder {
        self.authorised(self.http.get(url), token)
    }

    pub(super) fn post(&self, url: Url, token: &BearerToken) -> RequestBuilder {
        self.authorised(self.http.post(url), token)
    }

    fn authorised(&self, request: RequestBuilder, token: &BearerToken) -> RequestBuilder {
        request
            .header(APIKEY_HEADER, self.anon_key.as_str())
            .header(reqwest::header::AUTHORIZATION, token.authorization_value())
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

/// Status line plus a compact excerpt of the body, for error messages.
pub(super) fn status_message(status: StatusCode, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    }
}

pub(super) fn is_timeout_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT
    )
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
