//! Integration tests for IpLocator using wiremock.

use skycast_core::locate::{IpLocator, LocateError, Locator};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn successful_lookup_yields_position() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "lat": 51.5074,
            "lon": -0.1278
        })))
        .mount(&server)
        .await;

    let locator = IpLocator::with_base_url(server.uri()).unwrap();
    let position = locator.current_position().await.expect("position");

    assert!((position.latitude - 51.5074).abs() < f64::EPSILON);
    assert!((position.longitude - -0.1278).abs() < f64::EPSILON);
}

#[tokio::test]
async fn fail_status_maps_to_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "fail",
            "message": "private range"
        })))
        .mount(&server)
        .await;

    let locator = IpLocator::with_base_url(server.uri()).unwrap();
    let err = locator.current_position().await.unwrap_err();

    assert!(matches!(err, LocateError::Unavailable));
}

#[tokio::test]
async fn http_403_maps_to_permission_denied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let locator = IpLocator::with_base_url(server.uri()).unwrap();
    let err = locator.current_position().await.unwrap_err();

    assert!(matches!(err, LocateError::PermissionDenied));
}

#[tokio::test]
async fn unreachable_service_maps_to_unavailable() {
    let locator = IpLocator::with_base_url("http://127.0.0.1:9").unwrap();
    let err = locator.current_position().await.unwrap_err();

    assert!(matches!(err, LocateError::Unavailable));
}

#[tokio::test]
async fn missing_coordinates_map_to_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success"
        })))
        .mount(&server)
        .await;

    let locator = IpLocator::with_base_url(server.uri()).unwrap();
    let err = locator.current_position().await.unwrap_err();

    assert!(matches!(err, LocateError::Unavailable));
}
