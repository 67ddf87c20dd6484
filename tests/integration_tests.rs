use doghouse::utils::error::ErrorSeverity;
use doghouse::{DogHouseEngine, DogHouseError, HttpTransport, TomlConfig};
use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio_test::{assert_err, assert_ok};

const TOKEN: &str = "test-token";

fn config_for(server: &MockServer) -> TomlConfig {
    TomlConfig::from_toml_str(&format!(
        r#"
[api]
base_url = "{}"
token = "{}"
timeout_seconds = 5
"#,
        server.base_url(),
        TOKEN
    ))
    .unwrap()
}

#[tokio::test]
async fn test_end_to_end_run_with_pagination() {
    let server = MockServer::start();
    let auth = format!("Bearer {}", TOKEN);

    let probe_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/breeds/")
            .query_param("limit", "1")
            .header("Authorization", auth.as_str());
        then.status(200).json_body(json!({
            "count": 3,
            "results": [{"id": 1, "name": "Beagle"}],
            "next": server.url("/api/v1/breeds/?limit=1&offset=1")
        }));
    });

    let breeds_page1 = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/breeds/")
            .query_param("limit", "3")
            .header("Authorization", auth.as_str());
        then.status(200).json_body(json!({
            "count": 3,
            "results": [{"id": 1, "name": "Beagle"}, {"id": 2, "name": "Boxer"}],
            "next": server.url("/api/v1/breeds/cursor/2/")
        }));
    });

    let breeds_page2 = server.mock(|when, then| {
        when.method(GET).path("/api/v1/breeds/cursor/2/");
        then.status(200).json_body(json!({
            "count": 3,
            "results": [{"id": 3, "name": "Corgi"}],
            "next": null
        }));
    });

    let dogs_page1 = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/dogs/")
            .header("Authorization", auth.as_str());
        then.status(200).json_body(json!({
            "results": [
                {"id": 1, "name": "Rex", "breed": 2},
                {"id": 2, "name": "Fido", "breed": 1},
                {"id": 3, "name": "Ghost", "breed": 99}
            ],
            "next": server.url("/api/v1/dogs/cursor/2/")
        }));
    });

    let dogs_page2 = server.mock(|when, then| {
        when.method(GET).path("/api/v1/dogs/cursor/2/");
        then.status(200).json_body(json!({
            "results": [
                {"id": 4, "name": "Rex", "breed": 1},
                {"id": 5, "name": "Fido", "breed": 2}
            ]
        }));
    });

    let answer_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/answer/")
            .header("Authorization", auth.as_str())
            .json_body(json!({
                "totalBreeds": 3,
                "totalDogs": 4,
                "commonBreed": "Beagle",
                "commonDogName": "Rex"
            }));
        then.status(200).json_body(json!({"message": "Correct answer"}));
    });

    let config = config_for(&server);
    let transport = HttpTransport::from_config(&config).unwrap();
    let mut engine = DogHouseEngine::new(transport, config);

    let report = assert_ok!(engine.run().await);

    probe_mock.assert();
    breeds_page1.assert();
    breeds_page2.assert();
    dogs_page1.assert();
    dogs_page2.assert();
    answer_mock.assert();

    assert_eq!(report.breeds_loaded, 3);
    assert_eq!(report.dogs_loaded, 4);
    assert_eq!(report.answer.common_breed, "Beagle");
    assert_eq!(report.answer.common_dog_name, "Rex");
    assert_eq!(report.response, json!({"message": "Correct answer"}));
}

#[tokio::test]
async fn test_api_failure_aborts_run() {
    let server = MockServer::start();

    let probe_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/breeds/");
        then.status(500);
    });
    let answer_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/answer/");
        then.status(200);
    });

    let config = config_for(&server);
    let transport = HttpTransport::from_config(&config).unwrap();
    let mut engine = DogHouseEngine::new(transport, config);

    let err = assert_err!(engine.run().await);

    probe_mock.assert_hits(1);
    answer_mock.assert_hits(0);
    assert!(matches!(err, DogHouseError::ApiError(_)));
    assert_eq!(err.severity(), ErrorSeverity::Medium);
}

#[tokio::test]
async fn test_empty_catalog_is_no_breed_data() {
    let server = MockServer::start();

    let probe_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/breeds/").query_param("limit", "1");
        then.status(200)
            .json_body(json!({"count": 0, "results": [], "next": null}));
    });
    let dogs_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/dogs/");
        then.status(200).json_body(json!({"results": [], "next": null}));
    });
    let answer_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/answer/");
        then.status(200);
    });

    let config = config_for(&server);
    let transport = HttpTransport::from_config(&config).unwrap();
    let mut engine = DogHouseEngine::new(transport, config);

    let err = assert_err!(engine.run().await);

    probe_mock.assert_hits(1);
    dogs_mock.assert_hits(1);
    answer_mock.assert_hits(0);
    assert!(matches!(err, DogHouseError::NoBreedData));
}

#[tokio::test]
async fn test_run_from_config_file() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/breeds/").query_param("limit", "1");
        then.status(200).json_body(json!({
            "count": 1,
            "results": [{"id": 7, "name": "Pug"}],
            "next": null
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/dogs/");
        then.status(200).json_body(json!({
            "results": [{"id": 1, "name": "Otis", "breed": 7}],
            "next": null
        }));
    });
    let answer_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/answer/")
            .header("Authorization", "Bearer file-token");
        then.status(201).body("created");
    });

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        "[api]\nbase_url = \"{}/\"\ntoken = \"file-token\"\n",
        server.base_url()
    )
    .unwrap();

    let config = TomlConfig::from_file(config_file.path()).unwrap();
    let transport = HttpTransport::from_config(&config).unwrap();
    let mut engine = DogHouseEngine::new(transport, config);

    let report = assert_ok!(engine.run().await);

    answer_mock.assert();
    assert_eq!(report.answer.common_breed, "Pug");
    // 非 JSON 回應以字串保留
    assert_eq!(report.response, json!("created"));
}
