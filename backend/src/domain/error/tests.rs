//! Tests for domain error construction and trace capture.

use super::*;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::unauthorized("no token"), ErrorCode::Unauthorized)]
#[case(Error::upstream_query("query failed"), ErrorCode::UpstreamQueryFailure)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_empty_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InternalError, message);
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn details_are_absent_until_attached() {
    let error = Error::internal("boom");
    assert!(error.details().is_none());

    let error = error.with_details("socket closed");
    assert_eq!(error.details(), Some("socket closed"));
}

#[rstest]
#[case(ErrorCode::Unauthorized, false)]
#[case(ErrorCode::UpstreamQueryFailure, true)]
#[case(ErrorCode::InternalError, true)]
fn server_fault_classification(#[case] code: ErrorCode, #[case] expected: bool) {
    assert_eq!(code.is_server_fault(), expected);
}

#[rstest]
fn trace_id_is_none_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_captured_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::upstream_query("boom") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn display_uses_message() {
    let error = Error::unauthorized("Unauthorized - Please sign in");
    assert_eq!(error.to_string(), "Unauthorized - Please sign in");
}
