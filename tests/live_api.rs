use resv_cli::AppError;
use resv_cli::api::client::ApiClient;
use resv_cli::api::models::UserProfile;
use resv_cli::core::facade::{ApiMode, BookingApi};
use resv_cli::error::ErrorKind;
use resv_cli::storage::session::SessionStore;
use resv_cli::utils::retry::RetryConfig;
use serde_json::json;
use wiremock::matchers::{body_json_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn live_api(server: &MockServer, store: SessionStore) -> BookingApi {
    let client = ApiClient::new(server.uri()).expect("client");
    BookingApi::with_retry_config(ApiMode::Live, client, store, RetryConfig::immediate(2))
}

fn demo_user() -> UserProfile {
    UserProfile {
        id: 1,
        full_name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "+1234567890".to_string(),
        roles: vec!["customer".to_string()],
    }
}

#[tokio::test]
async fn sends_bearer_header_after_login() {
    let server = MockServer::start().await;
    let store = SessionStore::in_memory();
    store.store_session("tok-123", Some(&demo_user()));

    Mock::given(method("GET"))
        .and(path("/hotel/bookings/"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Bookings retrieved successfully",
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = live_api(&server, store);
    let envelope = api.get_hotel_bookings().await.expect("envelope");
    assert!(envelope.success);
}

#[tokio::test]
async fn omits_bearer_header_when_logged_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/properties/featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"id": 1, "title": "Villa"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = live_api(&server, SessionStore::in_memory());
    let envelope = api.get_featured_properties().await.expect("envelope");
    assert!(envelope.success);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn auth_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hotel/bookings/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Unauthorized"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = live_api(&server, SessionStore::in_memory());
    let result = api.get_hotel_bookings().await;
    match result {
        Err(AppError::Api(e)) => {
            assert_eq!(e.kind, ErrorKind::Auth);
            assert!(!e.retryable);
        }
        other => panic!("expected auth error, got {:?}", other.map(|e| e.success)),
    }
}

#[tokio::test]
async fn server_error_is_retried_max_retries_plus_one_times() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/properties/featured"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(3)
        .mount(&server)
        .await;

    let api = live_api(&server, SessionStore::in_memory());
    let result = api.get_featured_properties().await;
    match result {
        Err(AppError::Api(e)) => assert_eq!(e.kind, ErrorKind::Server),
        other => panic!("expected server error, got {:?}", other.map(|e| e.success)),
    }
}

#[tokio::test]
async fn masked_read_falls_back_to_fixture_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/restaurant/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let api = live_api(&server, SessionStore::in_memory());
    let envelope = api.get_bookings().await;
    assert!(envelope.success);
    assert_eq!(envelope.data.as_array().unwrap().len(), 2);
    assert_eq!(envelope.data[0]["serviceName"], "The Grand Palace");
}

#[tokio::test]
async fn masked_read_falls_back_when_backend_is_unreachable() {
    // Nothing listens on this port; the connect error classifies as
    // Network and the facade serves the canned list.
    let client = ApiClient::new("http://127.0.0.1:9".to_string()).expect("client");
    let api = BookingApi::with_retry_config(
        ApiMode::Live,
        client,
        SessionStore::in_memory(),
        RetryConfig::immediate(0),
    );

    let envelope = api.get_bookings().await;
    assert!(envelope.success);
    assert_eq!(envelope.data.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn write_operation_fails_when_backend_is_unreachable() {
    let client = ApiClient::new("http://127.0.0.1:9".to_string()).expect("client");
    let api = BookingApi::with_retry_config(
        ApiMode::Live,
        client,
        SessionStore::in_memory(),
        RetryConfig::immediate(0),
    );

    match api.create_booking(json!({"restaurantId": 1})).await {
        Err(AppError::Api(e)) => assert_eq!(e.kind, ErrorKind::Network),
        other => panic!("expected network error, got {:?}", other.map(|e| e.success)),
    }
}

#[tokio::test]
async fn write_operation_propagates_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/restaurant/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "No tables left"
        })))
        .mount(&server)
        .await;

    let api = live_api(&server, SessionStore::in_memory());
    let result = api.create_booking(json!({"restaurantId": 1})).await;
    match result {
        Err(AppError::Api(e)) => {
            assert_eq!(e.kind, ErrorKind::Server);
            assert_eq!(e.message, "No tables left");
        }
        other => panic!("expected server error, got {:?}", other.map(|e| e.success)),
    }
}

#[tokio::test]
async fn login_success_persists_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json_string(
            json!({"email": "john@example.com", "password": "secret"}).to_string(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Login successful",
            "token": "tok-live",
            "user": {
                "id": 1,
                "fullName": "John Doe",
                "email": "john@example.com",
                "phone": "+1234567890",
                "roles": ["customer"]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = SessionStore::in_memory();
    let api = live_api(&server, store.clone());
    let response = api.login("john@example.com", "secret").await.unwrap();
    assert!(response.success);
    assert_eq!(store.token().as_deref(), Some("tok-live"));
    assert_eq!(store.user().unwrap().full_name, "John Doe");

    api.logout().await.unwrap();
    assert!(store.token().is_none());
    assert!(store.user().is_none());
}

#[tokio::test]
async fn available_tables_sends_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/restaurant/available-tables"))
        .and(query_param("date", "2024-06-01"))
        .and(query_param("time", "19:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"availableTables": ["1"], "bookedTables": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = live_api(&server, SessionStore::in_memory());
    let envelope = api.get_available_tables("2024-06-01", "19:00").await.unwrap();
    assert_eq!(envelope.data["availableTables"][0], "1");
}

#[tokio::test]
async fn plain_http_error_body_falls_back_to_status_line() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/properties/featured"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let api = live_api(&server, SessionStore::in_memory());
    match api.get_featured_properties().await {
        Err(AppError::Api(e)) => {
            assert_eq!(e.kind, ErrorKind::Server);
            assert!(e.message.starts_with("HTTP 503"));
        }
        other => panic!("expected server error, got {:?}", other.map(|e| e.success)),
    }
}
