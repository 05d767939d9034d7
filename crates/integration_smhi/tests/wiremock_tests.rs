//! Integration tests for the SMHI client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use domain::{ObservationParameter, ObservationPeriod, StationId};
use integration_smhi::{ObservationClient, SmhiClient, SmhiConfig, SmhiError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const TIMESTAMP: i64 = 1_729_417_200_000;

/// Sample single-station response, trimmed from a real SMHI document
fn sample_station_response(value: &str) -> serde_json::Value {
    serde_json::json!({
        "updated": TIMESTAMP,
        "parameter": {
            "key": "1",
            "name": "Lufttemperatur",
            "summary": "momentanvärde, 1 gång/tim",
            "unit": "degree celsius"
        },
        "station": {
            "key": "159880",
            "name": "Arvidsjaur A",
            "owner": "SMHI",
            "ownerCategory": "CLIMATE",
            "measuringStations": "CORE",
            "height": 379.0
        },
        "period": {
            "key": "latest-hour",
            "from": TIMESTAMP - 3_600_000,
            "to": TIMESTAMP,
            "summary": "Data från senaste timmen",
            "sampling": "1 timme"
        },
        "position": [{
            "from": 0,
            "to": TIMESTAMP,
            "height": 379.0,
            "latitude": 65.5906,
            "longitude": 19.1837
        }],
        "link": [{
            "rel": "station",
            "type": "application/json",
            "href": "https://opendata-download-metobs.smhi.se/api/version/latest/parameter/1/station/159880.json"
        }],
        "value": [{ "date": TIMESTAMP, "value": value, "quality": "G" }]
    })
}

fn sample_station_set_response() -> serde_json::Value {
    serde_json::json!({
        "updated": TIMESTAMP,
        "parameter": { "key": "21", "name": "Byvind", "unit": "meter per second" },
        "period": { "key": "latest-hour", "from": TIMESTAMP - 3_600_000, "to": TIMESTAMP },
        "station": [
            {
                "key": "159880",
                "name": "Arvidsjaur A",
                "height": 379.0,
                "latitude": 65.5906,
                "longitude": 19.1837,
                "value": [{ "date": TIMESTAMP, "value": "5.3", "quality": "G" }]
            },
            {
                "key": "97280",
                "name": "Adelsö A",
                "value": null
            }
        ]
    })
}

/// Create a test client configured to use the mock server
fn create_test_client(mock_server: &MockServer) -> SmhiClient {
    let config = SmhiConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    SmhiClient::new(config).expect("Failed to create client")
}

fn station() -> StationId {
    #[allow(clippy::expect_used)]
    StationId::new(159_880).expect("valid station id")
}

async fn setup_mock(mock_server: &MockServer, url_path: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

const TEMPERATURE_PATH: &str = "/parameter/1/station/159880/period/latest-hour/data.json";

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_get_station_data_success() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        TEMPERATURE_PATH,
        ResponseTemplate::new(200).set_body_json(sample_station_response("15.2")),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .get_station_data(
            ObservationParameter::Temperature,
            station(),
            ObservationPeriod::LatestHour,
        )
        .await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let response = result.unwrap();
    let values = response.value.unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].date, TIMESTAMP);
    assert_eq!(values[0].value.as_deref(), Some("15.2"));
    assert_eq!(
        response.station.and_then(|s| s.name).as_deref(),
        Some("Arvidsjaur A")
    );
}

#[tokio::test]
async fn test_get_station_data_latest_day_path() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "/parameter/21/station/159880/period/latest-day/data.json",
        ResponseTemplate::new(200).set_body_json(sample_station_response("7.0")),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .get_station_data(
            ObservationParameter::WindGust,
            station(),
            ObservationPeriod::LatestDay,
        )
        .await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_get_station_set_data_success() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "/parameter/21/station-set/all/period/latest-hour/data.json",
        ResponseTemplate::new(200).set_body_json(sample_station_set_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .get_station_set_data(ObservationParameter::WindGust)
        .await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let stations = result.unwrap().station.unwrap();
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].key.as_deref(), Some("159880"));
    assert!(stations[1].value.is_none());
}

#[tokio::test]
async fn test_health_check_success() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "/parameter/1.json",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "key": "1" })),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await, "Expected health check to succeed");
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        TEMPERATURE_PATH,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .get_station_data(
            ObservationParameter::Temperature,
            station(),
            ObservationPeriod::LatestHour,
        )
        .await;

    assert!(
        matches!(result, Err(SmhiError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unknown_station_returns_not_found() {
    let mock_server = MockServer::start().await;
    // No mock mounted: wiremock answers 404 for every request

    let client = create_test_client(&mock_server);
    let result = client
        .get_station_data(
            ObservationParameter::Temperature,
            station(),
            ObservationPeriod::LatestHour,
        )
        .await;

    assert!(
        matches!(result, Err(SmhiError::NotFound(_))),
        "Expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "/parameter/1/station-set/all/period/latest-hour/data.json",
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .get_station_set_data(ObservationParameter::Temperature)
        .await;

    assert!(
        matches!(result, Err(SmhiError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        TEMPERATURE_PATH,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .get_station_data(
            ObservationParameter::Temperature,
            station(),
            ObservationPeriod::LatestHour,
        )
        .await;

    assert!(
        matches!(result, Err(SmhiError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_json_shape_mismatch_is_parse_error() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        TEMPERATURE_PATH,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "value": "15.2" })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .get_station_data(
            ObservationParameter::Temperature,
            station(),
            ObservationPeriod::LatestHour,
        )
        .await;

    assert!(
        matches!(result, Err(SmhiError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_health_check_fails_on_server_error() {
    let mock_server = MockServer::start().await;
    setup_mock(
        &mock_server,
        "/parameter/1.json",
        ResponseTemplate::new(503).set_body_string("Service Unavailable"),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(!client.is_healthy().await, "Expected health check to fail");
}

#[tokio::test]
async fn test_connection_refused_is_connection_failed() {
    let config = SmhiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    let client = SmhiClient::new(config).expect("Failed to create client");

    let result = client
        .get_station_data(
            ObservationParameter::Temperature,
            station(),
            ObservationPeriod::LatestHour,
        )
        .await;

    assert!(
        matches!(result, Err(SmhiError::ConnectionFailed(_))),
        "Expected ConnectionFailed, got: {result:?}"
    );
}
