//! Signed image URLs via the Supabase storage API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::client::{SupabaseClient, is_timeout_status, status_message};
use super::dto::{SignRequestDto, SignResponseDto, StorageErrorDto};
use crate::domain::ports::{ImageSigner, ImageSignerError};
use crate::domain::{BearerToken, ImagePath};

/// Signs objects in one bucket through
/// `POST {project}/storage/v1/object/sign/{bucket}/{path}`.
#[derive(Clone)]
pub struct SupabaseImageSigner {
    client: SupabaseClient,
    bucket: String,
}

impl SupabaseImageSigner {
    pub fn new(client: SupabaseClient, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ImageSigner for SupabaseImageSigner {
    async fn sign(
        &self,
        path: &ImagePath,
        expires_in: Duration,
        token: &BearerToken,
    ) -> Result<Option<String>, ImageSignerError> {
        let segments = ["storage", "v1", "object", "sign", self.bucket.as_str()]
            .into_iter()
            .chain(path.as_str().split('/').filter(|segment| !segment.is_empty()));
        let url = self.client.endpoint(segments);
        let response = self
            .client
            .post(url, token)
            .json(&SignRequestDto {
                expires_in: expires_in.as_secs(),
            })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let signed: SignResponseDto = serde_json::from_slice(body.as_ref()).map_err(|err| {
            ImageSignerError::decode(format!("invalid signing payload: {err}"))
        })?;
        Ok(signed
            .signed_url
            .filter(|url| !url.trim().is_empty())
            .map(|url| self.client.storage_url(&url)))
    }
}

fn map_transport_error(error: reqwest::Error) -> ImageSignerError {
    if error.is_timeout() {
        ImageSignerError::timeout(error.to_string())
    } else {
        ImageSignerError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ImageSignerError {
    let message = status_message(status, body);
    if status == StatusCode::NOT_FOUND {
        return ImageSignerError::not_found(message);
    }
    if is_timeout_status(status) {
        return ImageSignerError::timeout(message);
    }
    // Storage reports missing objects as 400 with a 404 inside the body.
    let storage_error = serde_json::from_slice::<StorageErrorDto>(body).ok();
    match status {
        _ if storage_error.as_ref().is_some_and(StorageErrorDto::is_not_found) => {
            ImageSignerError::not_found(message)
        }
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            let reason = storage_error.and_then(|dto| dto.message).unwrap_or(message);
            ImageSignerError::rejected(reason)
        }
        _ => ImageSignerError::transport(message),
    }
}
