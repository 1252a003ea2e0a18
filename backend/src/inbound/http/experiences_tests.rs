//! Handler tests for the experience listing endpoint.

use actix_web::http::StatusCode;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN, AUTHORIZATION, CONTENT_TYPE,
};
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::MockExperiencesQuery;
use crate::domain::{TRACE_ID_HEADER, UNAUTHORIZED_MESSAGE};
use crate::inbound::http::cors::{ALLOW_HEADERS, ALLOW_ORIGIN};
use crate::inbound::http::test_utils::listing_app;

fn experience(id: &str, image_url: Option<&str>) -> EnrichedExperience {
    EnrichedExperience {
        id: id.to_owned(),
        title: Some(format!("Experience {id}")),
        category: Some("food".to_owned()),
        latitude: Some(55.97),
        longitude: Some(-3.17),
        image_url: image_url.map(str::to_owned),
    }
}

fn untouched_query() -> MockExperiencesQuery {
    let mut query = MockExperiencesQuery::new();
    query.expect_list_experiences().times(0);
    query
}

fn assert_cors(res: &actix_web::dev::ServiceResponse) {
    assert_eq!(
        res.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).map(|v| v.as_bytes()),
        Some(ALLOW_ORIGIN.as_bytes())
    );
    assert_eq!(
        res.headers().get(ACCESS_CONTROL_ALLOW_HEADERS).map(|v| v.as_bytes()),
        Some(ALLOW_HEADERS.as_bytes())
    );
}

#[actix_web::test]
async fn preflight_answers_ok_without_calling_the_listing() {
    let app = test::init_service(listing_app(untouched_query())).await;
    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri(EXPERIENCES_PATH)
        .to_request();

    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_cors(&res);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body = test::read_body(res).await;
    assert_eq!(body.as_ref(), b"ok");
}

#[rstest]
#[case(None)]
#[case(Some("Token abc"))]
#[case(Some("Bearer"))]
#[actix_web::test]
async fn unusable_credentials_yield_exact_unauthorised_body(#[case] header: Option<&str>) {
    let app = test::init_service(listing_app(untouched_query())).await;
    let mut req = test::TestRequest::get().uri(EXPERIENCES_PATH);
    if let Some(value) = header {
        req = req.insert_header((AUTHORIZATION, value));
    }

    let res = test::call_service(&app, req.to_request()).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_cors(&res);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "error": UNAUTHORIZED_MESSAGE }));
}

#[actix_web::test]
async fn rejected_token_yields_exact_unauthorised_body() {
    let mut query = MockExperiencesQuery::new();
    query
        .expect_list_experiences()
        .times(1)
        .returning(|_| Err(Error::unauthorized(UNAUTHORIZED_MESSAGE)));
    let app = test::init_service(listing_app(query)).await;
    let req = test::TestRequest::get()
        .uri(EXPERIENCES_PATH)
        .insert_header((AUTHORIZATION, "Bearer expired"))
        .to_request();

    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "error": "Unauthorized - Please sign in" }));
}

#[rstest]
#[case(Method::GET)]
#[case(Method::POST)]
#[actix_web::test]
async fn listing_returns_data_and_count(#[case] method: Method) {
    let mut query = MockExperiencesQuery::new();
    query
        .expect_list_experiences()
        .withf(|token| token.as_str() == "good-token")
        .times(1)
        .returning(|_| {
            Ok(ExperienceListing::new(vec![
                experience("a", Some("https://cdn.test/p1?token=x")),
                experience("b", None),
            ]))
        });
    let app = test::init_service(listing_app(query)).await;
    let req = test::TestRequest::default()
        .method(method)
        .uri(EXPERIENCES_PATH)
        .insert_header((AUTHORIZATION, "Bearer good-token"))
        .to_request();

    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_cors(&res);
    assert_eq!(
        res.headers().get(CONTENT_TYPE).map(|v| v.as_bytes()),
        Some(b"application/json".as_slice())
    );
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "data": [
                {
                    "id": "a",
                    "title": "Experience a",
                    "category": "food",
                    "latitude": 55.97,
                    "longitude": -3.17,
                    "image_url": "https://cdn.test/p1?token=x",
                },
                {
                    "id": "b",
                    "title": "Experience b",
                    "category": "food",
                    "latitude": 55.97,
                    "longitude": -3.17,
                    "image_url": null,
                },
            ],
            "count": 2,
        })
    );
}

#[actix_web::test]
async fn empty_listing_is_still_an_envelope() {
    let mut query = MockExperiencesQuery::new();
    query
        .expect_list_experiences()
        .times(1)
        .returning(|_| Ok(ExperienceListing::default()));
    let app = test::init_service(listing_app(query)).await;
    let req = test::TestRequest::get()
        .uri(EXPERIENCES_PATH)
        .insert_header((AUTHORIZATION, "Bearer good-token"))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "data": [], "count": 0 }));
}

#[actix_web::test]
async fn missing_columns_are_rendered_as_null() {
    let mut query = MockExperiencesQuery::new();
    query.expect_list_experiences().times(1).returning(|_| {
        Ok(ExperienceListing::new(vec![EnrichedExperience {
            id: "bare".to_owned(),
            title: None,
            category: None,
            latitude: None,
            longitude: None,
            image_url: None,
        }]))
    });
    let app = test::init_service(listing_app(query)).await;
    let req = test::TestRequest::get()
        .uri(EXPERIENCES_PATH)
        .insert_header((AUTHORIZATION, "Bearer good-token"))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({
            "data": [{
                "id": "bare",
                "title": null,
                "category": null,
                "latitude": null,
                "longitude": null,
                "image_url": null,
            }],
            "count": 1,
        })
    );
}

#[actix_web::test]
async fn query_failure_yields_error_and_details_without_data() {
    let mut query = MockExperiencesQuery::new();
    query.expect_list_experiences().times(1).returning(|_| {
        Err(Error::upstream_query("failed to query experiences")
            .with_details("experience query failed: permission denied"))
    });
    let app = test::init_service(listing_app(query)).await;
    let req = test::TestRequest::post()
        .uri(EXPERIENCES_PATH)
        .insert_header((AUTHORIZATION, "Bearer good-token"))
        .to_request();

    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&res);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "failed to query experiences");
    assert_eq!(body["details"], "experience query failed: permission denied");
    assert!(body.get("data").is_none());
}

#[actix_web::test]
async fn other_methods_are_not_routed_to_the_listing() {
    let app = test::init_service(listing_app(untouched_query())).await;
    let req = test::TestRequest::delete()
        .uri(EXPERIENCES_PATH)
        .insert_header((AUTHORIZATION, "Bearer good-token"))
        .to_request();

    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}
