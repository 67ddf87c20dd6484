use doghouse::{DogHouseError, HttpTransport, Transport};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn transport() -> HttpTransport {
    HttpTransport::new(Duration::from_secs(5), "doghouse-test").unwrap()
}

#[tokio::test]
async fn test_get_sends_bearer_token_and_parses_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/dogs/")
            .header("Authorization", "Bearer abc")
            .header("User-Agent", "doghouse-test");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"results": [], "next": null}));
    });

    let body = transport()
        .get(&server.url("/api/v1/dogs/"), "abc")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(body, json!({"results": [], "next": null}));
}

#[tokio::test]
async fn test_unauthorized_maps_to_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/dogs/");
        then.status(401).json_body(json!({"detail": "Invalid token."}));
    });

    let err = transport()
        .get(&server.url("/api/v1/dogs/"), "wrong")
        .await
        .unwrap_err();

    match &err {
        DogHouseError::ApiError(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(401)),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.recovery_suggestion().contains("token"));
    assert!(err.user_friendly_message().contains("401"));
}

#[tokio::test]
async fn test_post_sends_json_payload() {
    let server = MockServer::start();
    let payload = json!({"totalBreeds": 1, "totalDogs": 0, "commonBreed": "Pug", "commonDogName": ""});
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/answer/")
            .header("Authorization", "Bearer abc")
            .json_body(payload.clone());
        then.status(200).json_body(json!({"ok": true}));
    });

    let response = transport()
        .post(&server.url("/api/v1/answer/"), &payload, "abc")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response, json!({"ok": true}));
}

#[tokio::test]
async fn test_post_error_status_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/answer/");
        then.status(400).body("bad payload");
    });

    let result = transport()
        .post(&server.url("/api/v1/answer/"), &json!({}), "abc")
        .await;

    assert!(matches!(result, Err(DogHouseError::ApiError(_))));
}
