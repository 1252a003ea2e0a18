//! Wire payloads exchanged with the Supabase APIs.
//!
//! Responses are decoded into these DTOs first and mapped into domain types
//! in one pass.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{ExperienceRecord, ImagePath, UserIdentity};

/// Columns requested from the `experiences` table.
pub(super) const EXPERIENCE_COLUMNS: &str = "id,title,latitude,longitude,category,image_path";

/// `GET /auth/v1/user` response. Only the fields the listing needs.
#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: Option<String>,
    #[serde(default)]
    pub(super) email: Option<String>,
}

impl UserDto {
    /// A user object without an identifier counts as "no user".
    pub(super) fn into_identity(self) -> Option<UserIdentity> {
        self.id
            .filter(|id| !id.trim().is_empty())
            .map(|id| UserIdentity::new(id, self.email))
    }
}

/// One row of the `experiences` table.
///
/// Only `id` is required. Every other column is passed through as stored,
/// `null` included, so one bad row never hides the rest of the listing.
#[derive(Debug, Deserialize)]
pub(super) struct ExperienceRowDto {
    id: Value,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    image_path: Option<String>,
}

impl ExperienceRowDto {
    pub(super) fn into_record(self) -> Result<ExperienceRecord, String> {
        let id = match self.id {
            Value::String(id) => id,
            Value::Number(id) => id.to_string(),
            other => return Err(format!("experience row has unusable id {other}")),
        };
        Ok(ExperienceRecord {
            title: self.title,
            category: self.category,
            latitude: self.latitude,
            longitude: self.longitude,
            image_path: ImagePath::from_optional(self.image_path),
            id,
        })
    }
}

/// Decode a PostgREST rows payload. An empty body or `null` means no rows.
pub(super) fn decode_rows(body: &[u8]) -> Result<Vec<ExperienceRecord>, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let rows: Option<Vec<ExperienceRowDto>> = serde_json::from_slice(body)
        .map_err(|err| format!("invalid experiences payload: {err}"))?;
    rows.unwrap_or_default()
        .into_iter()
        .map(ExperienceRowDto::into_record)
        .collect()
}

/// PostgREST error body.
#[derive(Debug, Deserialize)]
pub(super) struct PostgrestErrorDto {
    pub(super) message: String,
}

/// `POST /storage/v1/object/sign/{bucket}/{path}` request body.
#[derive(Debug, Serialize)]
pub(super) struct SignRequestDto {
    #[serde(rename = "expiresIn")]
    pub(super) expires_in: u64,
}

/// Signing response; `signedURL` is relative to the storage API root.
#[derive(Debug, Deserialize)]
pub(super) struct SignResponseDto {
    #[serde(rename = "signedURL", default)]
    pub(super) signed_url: Option<String>,
}

/// Storage API error body. `statusCode` is a string on the wire.
#[derive(Debug, Deserialize)]
pub(super) struct StorageErrorDto {
    #[serde(rename = "statusCode", default)]
    pub(super) status_code: Option<String>,
    #[serde(default)]
    pub(super) error: Option<String>,
    #[serde(default)]
    pub(super) message: Option<String>,
}

impl StorageErrorDto {
    pub(super) fn is_not_found(&self) -> bool {
        self.status_code.as_deref() == Some("404")
            || self
                .error
                .as_deref()
                .is_some_and(|error| error.eq_ignore_ascii_case("not_found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"  \n".as_slice())]
    #[case(b"null".as_slice())]
    #[case(b"[]".as_slice())]
    fn empty_payloads_decode_to_no_rows(#[case] body: &[u8]) {
        assert!(decode_rows(body).expect("decodes").is_empty());
    }

    #[rstest]
    fn rows_keep_order_and_accept_numeric_ids() {
        let body = br#"[
            {"id": "a", "title": "A", "latitude": 1.5, "longitude": 2.5, "category": "x", "image_path": "p1"},
            {"id": 42, "title": "B", "latitude": -1.0, "longitude": 0.0, "category": null, "image_path": null}
        ]"#;
        let records = decode_rows(body).expect("decodes");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a");
        assert_eq!(records[0].image_path.as_ref().map(ImagePath::as_str), Some("p1"));
        assert_eq!(records[1].id, "42");
        assert!(records[1].category.is_none());
        assert!(records[1].image_path.is_none());
    }

    #[rstest]
    fn null_columns_pass_through_without_dropping_the_row() {
        let body = br#"[
            {"id": "a", "title": null, "latitude": null, "longitude": null, "category": null},
            {"id": "b", "title": "B", "latitude": 55.9, "longitude": -3.2, "category": "food"}
        ]"#;
        let records = decode_rows(body).expect("null columns decode");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a");
        assert!(records[0].title.is_none());
        assert!(records[0].category.is_none());
        assert!(records[0].latitude.is_none());
        assert!(records[0].longitude.is_none());
        assert_eq!(records[1].latitude, Some(55.9));
        assert_eq!(records[1].title.as_deref(), Some("B"));
    }

    #[rstest]
    #[case(br#"[{"id": null, "title": "A", "latitude": 1.0, "longitude": 2.5}]"#.as_slice())]
    #[case(br#"{"message": "not rows"}"#.as_slice())]
    fn malformed_rows_are_rejected(#[case] body: &[u8]) {
        assert!(decode_rows(body).is_err());
    }

    #[rstest]
    fn user_without_id_is_no_user() {
        let dto: UserDto = serde_json::from_str(r#"{"email": "a@b.c"}"#).expect("decodes");
        assert!(dto.into_identity().is_none());
    }

    #[rstest]
    #[case(r#"{"statusCode": "404", "error": "Bad Request", "message": "Object not found"}"#, true)]
    #[case(r#"{"statusCode": "400", "error": "not_found", "message": "Object not found"}"#, true)]
    #[case(r#"{"statusCode": "403", "error": "Unauthorized", "message": "denied"}"#, false)]
    fn storage_not_found_detection(#[case] body: &str, #[case] expected: bool) {
        let dto: StorageErrorDto = serde_json::from_str(body).expect("decodes");
        assert_eq!(dto.is_not_found(), expected);
    }
}
