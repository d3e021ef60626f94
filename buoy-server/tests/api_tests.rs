// API tests that drive the axum router directly.
// The upstream provider is mocked with mockito; static assets come from a tempdir.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use buoy_server::ndbc::{NdbcClient, NdbcConfig};
use buoy_server::web::{AppState, create_router};
use http_body_util::BodyExt;
use mockito::{Matcher, Server};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

const HEADER: &str = "#YY  MM DD hh mm WDIR WSPD GST  WVHT   DPD   APD MWD   PRES  ATMP  WTMP  DEWP";
const UNITS: &str = "#yr  mo dy hr mn degT m/s  m/s     m   sec   sec degT   hPa  degC  degC  degC";

fn report(row: &str) -> String {
    format!("{HEADER}\n{UNITS}\n{row}\n")
}

struct TestApp {
    router: Router,
    _static_dir: TempDir,
}

fn app(upstream_url: &str) -> TestApp {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<!doctype html><title>Gulf of Maine Buoy Monitor</title>",
    )
    .unwrap();

    let client = NdbcClient::new(NdbcConfig::default().with_base_url(upstream_url)).unwrap();
    let router = create_router(AppState::new(client), static_dir.path());

    TestApp {
        router,
        _static_dir: static_dir,
    }
}

async fn get(app: &TestApp, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(app: &TestApp, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn lists_all_stations() {
    let app = app("http://127.0.0.1:9");

    let (status, body) = get_json(&app, "/api/stations").await;
    assert_eq!(status, StatusCode::OK);

    let stations = body.as_array().unwrap();
    assert_eq!(stations.len(), 11);
    assert_eq!(
        stations[0],
        json!({"id": "44007", "name": "Portland Approach", "lat": 43.525, "lon": -70.140})
    );
    assert_eq!(stations[10]["id"], "MISM1");
}

#[tokio::test]
async fn station_data_full_report() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/data/realtime2/44013.txt")
        .with_status(200)
        .with_body(report(
            "2024 03 15 14 30 270 8.5 11.2 1.3 7 5.5 280 1013.2 9.5 6.2 4.1",
        ))
        .create_async()
        .await;

    let app = app(&server.url());
    let (status, body) = get_json(&app, "/api/station/44013/data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "stationId": "44013",
            "timestamp": "2024-03-15T14:30:00.000Z",
            "windDir": 270.0,
            "windSpeed": 8.5,
            "gustSpeed": 11.2,
            "waveHeight": 1.3,
            "domPeriod": 7.0,
            "avgPeriod": 5.5,
            "waveDir": 280.0,
            "pressure": 1013.2,
            "airTemp": 9.5,
            "waterTemp": 6.2,
            "dewPoint": 4.1,
        })
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn station_data_missing_values_are_null() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/data/realtime2/44013.txt")
        .with_status(200)
        .with_body(report(
            "2024 03 15 14 30 999 99.0 99.0 99.00 MM MM 999 9999.0 999.0 999.0 999.0",
        ))
        .create_async()
        .await;

    let app = app(&server.url());
    let (status, body) = get_json(&app, "/api/station/44013/data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timestamp"], "2024-03-15T14:30:00.000Z");
    let map = body.as_object().unwrap();
    assert_eq!(map.len(), 13);
    for (key, value) in map {
        if key != "stationId" && key != "timestamp" {
            assert!(value.is_null(), "{key} should be null");
        }
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_id_rejected_before_fetch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let app = app(&server.url());
    for uri in [
        "/api/station/ab/data",
        "/api/station/ABCDEFGHI/data",
        "/api/station/44%2D13/data",
    ] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({"error": "Invalid station ID"}));
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_404_is_no_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/data/realtime2/99999.txt")
        .with_status(404)
        .create_async()
        .await;

    let app = app(&server.url());
    let (status, body) = get_json(&app, "/api/station/99999/data").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No data available"}));

    mock.assert_async().await;
}

#[tokio::test]
async fn short_report_is_no_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/data/realtime2/44013.txt")
        .with_status(200)
        .with_body(format!("{HEADER}\n"))
        .create_async()
        .await;

    let app = app(&server.url());
    let (status, body) = get_json(&app, "/api/station/44013/data").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No data available"}));

    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/data/realtime2/44013.txt")
        .with_status(500)
        .create_async()
        .await;

    let app = app(&server.url());
    let (status, body) = get_json(&app, "/api/station/44013/data").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({"error": "HTTP 500"}));

    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = app(&format!("http://{addr}"));
    let (status, body) = get_json(&app, "/api/station/44013/data").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("transport error:")
    );
}

#[tokio::test]
async fn serves_static_index() {
    let app = app("http://127.0.0.1:9");

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("Gulf of Maine Buoy Monitor"));

    let (status, _) = get(&app, "/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_check() {
    let app = app("http://127.0.0.1:9");

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}
