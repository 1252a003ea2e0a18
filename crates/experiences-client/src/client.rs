//! HTTP client for the listing endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::error::FetchError;
use crate::experience::{ErrorEnvelope, Experience, ListingEnvelope};

/// Anything that can produce the listing for an access token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceSource: Send + Sync {
    /// Fetch every experience visible to the holder of `access_token`.
    async fn fetch_experiences(&self, access_token: &str) -> Result<Vec<Experience>, FetchError>;
}

/// Client calling the deployed listing function.
#[derive(Debug, Clone)]
pub struct ExperiencesClient {
    http: Client,
    function_url: Url,
}

impl ExperiencesClient {
    /// Build a client for `function_url` whose requests give up after
    /// `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(function_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, function_url })
    }
}

#[async_trait]
impl ExperienceSource for ExperiencesClient {
    async fn fetch_experiences(&self, access_token: &str) -> Result<Vec<Experience>, FetchError> {
        let response = self
            .http
            .post(self.function_url.clone())
            .bearer_auth(access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(network_error)?;
        if !status.is_success() {
            let error = server_error(status, body.as_ref());
            warn!(status = status.as_u16(), error = %error, "listing request failed");
            return Err(error);
        }

        let envelope: ListingEnvelope =
            serde_json::from_slice(body.as_ref()).map_err(|err| FetchError::Decode {
                message: format!("invalid listing payload: {err}"),
            })?;
        let experiences = envelope.data.unwrap_or_default();
        debug!(count = experiences.len(), "listing fetched");
        Ok(experiences)
    }
}

fn network_error(error: reqwest::Error) -> FetchError {
    FetchError::Network {
        message: error.to_string(),
    }
}

fn server_error(status: StatusCode, body: &[u8]) -> FetchError {
    let message = serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| status.to_string());
    FetchError::Server {
        status: status.as_u16(),
        message,
    }
}
