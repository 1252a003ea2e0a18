//! Experience rows via the Supabase PostgREST API.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::client::{SupabaseClient, is_timeout_status, status_message};
use super::dto::{EXPERIENCE_COLUMNS, PostgrestErrorDto, decode_rows};
use crate::domain::ports::{ExperienceRepository, ExperienceRepositoryError};
use crate::domain::{BearerToken, ExperienceRecord};

const EXPERIENCES_TABLE: &str = "experiences";
const NEWEST_FIRST: &str = "created_at.desc";

/// Lists experiences through
/// `GET {project}/rest/v1/experiences?select=...&order=created_at.desc`.
#[derive(Clone)]
pub struct SupabaseExperienceRepository {
    client: SupabaseClient,
}

impl SupabaseExperienceRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExperienceRepository for SupabaseExperienceRepository {
    async fn list_newest_first(
        &self,
        token: &BearerToken,
    ) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
        let url = self.client.endpoint(["rest", "v1", EXPERIENCES_TABLE]);
        let response = self
            .client
            .get(url, token)
            .query(&[("select", EXPERIENCE_COLUMNS), ("order", NEWEST_FIRST)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        decode_rows(body.as_ref()).map_err(ExperienceRepositoryError::decode)
    }
}

fn map_transport_error(error: reqwest::Error) -> ExperienceRepositoryError {
    if error.is_timeout() {
        ExperienceRepositoryError::timeout(error.to_string())
    } else {
        ExperienceRepositoryError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ExperienceRepositoryError {
    if is_timeout_status(status) {
        return ExperienceRepositoryError::timeout(status_message(status, body));
    }
    // PostgREST explains query failures in a `message` field.
    match serde_json::from_slice::<PostgrestErrorDto>(body) {
        Ok(dto) => ExperienceRepositoryError::query(dto.message),
        Err(_) => ExperienceRepositoryError::query(status_message(status, body)),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repository(server: &MockServer, timeout: Duration) -> SupabaseExperienceRepository {
        let client =
            SupabaseClient::new(&server.uri(), "anon-key", timeout).expect("valid client");
        SupabaseExperienceRepository::new(client)
    }

    fn token() -> BearerToken {
        BearerToken::new("caller-jwt").expect("token shape")
    }

    #[tokio::test]
    async fn selects_columns_newest_first_as_the_caller() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/experiences"))
            .and(query_param(
                "select",
                "id,title,latitude,longitude,category,image_path",
            ))
            .and(query_param("order", "created_at.desc"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer caller-jwt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "new", "title": "Newest", "latitude": 55.9, "longitude": -3.2,
                 "category": "food", "image_path": "u1/new.jpg"},
                {"id": "old", "title": "Oldest", "latitude": 55.8, "longitude": -3.1,
                 "category": "outdoors", "image_path": null},
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let records = repository(&server, Duration::from_secs(5))
            .list_newest_first(&token())
            .await
            .expect("rows");

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
        assert!(records[1].image_path.is_none());
    }

    #[tokio::test]
    async fn postgrest_error_message_becomes_query_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/experiences"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": "42P01",
                "message": "relation \"public.experiences\" does not exist",
                "details": null,
                "hint": null,
            })))
            .mount(&server)
            .await;

        let error = repository(&server, Duration::from_secs(5))
            .list_newest_first(&token())
            .await
            .expect_err("query error");

        assert_eq!(
            error.to_string(),
            "experience query failed: relation \"public.experiences\" does not exist"
        );
    }

    #[tokio::test]
    async fn opaque_server_error_keeps_status_in_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/experiences"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let error = repository(&server, Duration::from_secs(5))
            .list_newest_first(&token())
            .await
            .expect_err("query error");

        assert!(matches!(error, ExperienceRepositoryError::Query { .. }));
        assert!(error.to_string().contains("status 502: Bad Gateway"));
    }

    #[tokio::test]
    async fn empty_body_is_an_empty_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/experiences"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let records = repository(&server, Duration::from_secs(5))
            .list_newest_first(&token())
            .await
            .expect("rows");

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn slow_store_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/experiences"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let error = repository(&server, Duration::from_millis(100))
            .list_newest_first(&token())
            .await
            .expect_err("timeout");

        assert!(matches!(error, ExperienceRepositoryError::Timeout { .. }));
    }
}
