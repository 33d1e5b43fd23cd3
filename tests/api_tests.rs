//! WeatherClient tests against a mock HTTP server

use skycast::api::{FetchError, WeatherClient};
use skycast::config::AppConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LONDON_BODY: &str = r#"{
    "coord": {"lon": -0.13, "lat": 51.51},
    "main": {"temp": 20.9, "feels_like": 20.4, "humidity": 55},
    "wind": {"speed": 3.2, "deg": 240},
    "name": "London"
}"#;

fn client_for(server: &MockServer) -> WeatherClient {
    let config = AppConfig {
        api_key: "test-key".into(),
        log_file: None,
    };
    WeatherClient::new(&config).with_base_url(server.uri())
}

#[tokio::test]
async fn successful_fetch_floors_and_labels() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(LONDON_BODY, "application/json"))
        .mount(&server)
        .await;

    let reading = client_for(&server)
        .current_by_city("London")
        .await
        .expect("fetch should succeed");

    assert_eq!(reading.temperature_c, 20);
    assert_eq!(reading.wind_speed, 3);
    assert_eq!(reading.humidity_pct, 55);
    assert_eq!(reading.city_label, "London");
}

#[tokio::test]
async fn negative_temperatures_floor_downward() {
    let server = MockServer::start().await;
    let body = r#"{"main": {"temp": -3.7, "humidity": 81}, "wind": {"speed": 1.9}}"#;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let reading = client_for(&server)
        .current_by_city("Oslo")
        .await
        .expect("fetch should succeed");

    assert_eq!(reading.temperature_c, -4);
    assert_eq!(reading.wind_speed, 1);
}

#[tokio::test]
async fn unknown_city_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw(r#"{"cod":"404","message":"city not found"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_by_city("Nowhereville")
        .await
        .expect_err("fetch should fail");

    assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 404));
}

#[tokio::test]
async fn unexpected_body_is_a_payload_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"cod":200}"#, "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_by_city("London")
        .await
        .expect_err("fetch should fail");

    assert!(matches!(err, FetchError::Payload(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let err = client
        .current_by_city("London")
        .await
        .expect_err("fetch should fail");

    assert!(matches!(err, FetchError::Transport(_)));
}
