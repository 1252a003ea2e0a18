//! Bearer token verification against Supabase auth.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::client::{SupabaseClient, is_timeout_status, status_message};
use super::dto::UserDto;
use crate::domain::ports::{IdentityProvider, IdentityProviderError};
use crate::domain::{BearerToken, UserIdentity};

/// Resolves bearer tokens through `GET {project}/auth/v1/user`.
#[derive(Clone)]
pub struct SupabaseIdentityProvider {
    client: SupabaseClient,
}

impl SupabaseIdentityProvider {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentityProvider {
    async fn verify_token(
        &self,
        token: &BearerToken,
    ) -> Result<Option<UserIdentity>, IdentityProviderError> {
        let url = self.client.endpoint(["auth", "v1", "user"]);
        let response = self
            .client
            .get(url, token)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let user: Option<UserDto> = serde_json::from_slice(body.as_ref()).map_err(|err| {
            IdentityProviderError::decode(format!("invalid user payload: {err}"))
        })?;
        Ok(user.and_then(UserDto::into_identity))
    }
}

fn map_transport_error(error: reqwest::Error) -> IdentityProviderError {
    if error.is_timeout() {
        IdentityProviderError::timeout(error.to_string())
    } else {
        IdentityProviderError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> IdentityProviderError {
    let message = status_message(status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            IdentityProviderError::rejected(message)
        }
        _ if is_timeout_status(status) => IdentityProviderError::timeout(message),
        _ => IdentityProviderError::transport(message),
    }
}
