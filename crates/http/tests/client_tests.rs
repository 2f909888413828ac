//! Integration tests for the BodyLover API client

use bodylover_http::client::{
    ApiClient, ClientConfig, ClientError, HttpResponse, ResponseInterceptor,
};
use bodylover_http::types::{LoginRequest, RegisterRequest, UserMode};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct CountingInterceptor {
    successes: AtomicUsize,
    failures: AtomicUsize,
}

impl ResponseInterceptor for CountingInterceptor {
    fn intercept(
        &self,
        result: Result<HttpResponse, ClientError>,
    ) -> Result<HttpResponse, ClientError> {
        match &result {
            Ok(_) => self.successes.fetch_add(1, Ordering::SeqCst),
            Err(_) => self.failures.fetch_add(1, Ordering::SeqCst),
        };
        result
    }
}

fn counting_client(base_url: String) -> (ApiClient, Arc<CountingInterceptor>) {
    let counter = Arc::new(CountingInterceptor::default());
    let client = ApiClient::builder()
        .base_url(base_url)
        .interceptor(counter.clone())
        .build()
        .unwrap();
    (client, counter)
}

#[test]
fn test_client_defaults() {
    let client = ApiClient::new().unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080/api");
    assert_eq!(client.timeout(), Duration::from_millis(5_000));
    assert_eq!(
        client.config().default_headers.get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[test]
fn test_client_builder_trims_trailing_slash() {
    let client = ApiClient::builder()
        .base_url("http://localhost:8080/api/")
        .build()
        .unwrap();
    assert_eq!(client.base_url(), ClientConfig::DEFAULT_BASE_URL);
}

#[test]
fn test_client_builder_rejects_invalid_base_url() {
    let result = ApiClient::builder().base_url("not a url").build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[test]
fn test_client_builder_rejects_invalid_header() {
    let result = ApiClient::builder()
        .default_header("bad header", "value")
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_default_content_type_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, counter) = counting_client(mock_server.uri());
    let body: Value = client.get("/ping").await.unwrap();

    assert_eq!(body["ok"], true);
    assert_eq!(counter.successes.load(Ordering::SeqCst), 1);
    assert_eq!(counter.failures.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_per_call_content_type_overrides_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header("content-type", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();
    let request = client
        .request(Method::POST, "/upload")
        .header(CONTENT_TYPE, "text/plain")
        .body("raw text");

    let result: Result<Value, _> = client.execute(request).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_non_success_status_is_intercepted_and_returned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let (client, counter) = counting_client(mock_server.uri());
    let result: Result<Value, _> = client.get("/health").await;

    match result {
        Err(ClientError::HttpStatus { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(counter.failures.load(Ordering::SeqCst), 1);
    assert_eq!(counter.successes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(1_000)),
        )
        .mount(&mock_server)
        .await;

    let counter = Arc::new(CountingInterceptor::default());
    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .interceptor(counter.clone())
        .build()
        .unwrap();

    let result: Result<Value, _> = client.get("/slow").await;
    assert!(matches!(result, Err(ClientError::Timeout)));
    assert_eq!(counter.failures.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_failure() {
    // Reserve a port, then release it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let (client, counter) = counting_client(format!("http://127.0.0.1:{port}/api"));
    let result: Result<Value, _> = client.get("/auth/login").await;

    assert!(matches!(result, Err(ClientError::Network(_))));
    assert_eq!(counter.failures.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_login_unwraps_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"accountId": "alice", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Login successful",
            "data": {
                "id": 1,
                "accountId": "alice",
                "username": "Alice",
                "mode": "ADULT",
                "age": 34,
                "points": 120
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(format!("{}/api", mock_server.uri()))
        .build()
        .unwrap();

    let user = client
        .login(&LoginRequest {
            account_id: "alice".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, Some(1));
    assert_eq!(user.username, "Alice");
    assert_eq!(user.mode, Some(UserMode::Adult));
    assert_eq!(user.points, Some(120));
}

#[tokio::test]
async fn test_login_failure_code_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 400, "message": "Invalid password"})),
        )
        .mount(&mock_server)
        .await;

    let (client, counter) = counting_client(mock_server.uri());
    let result = client
        .login(&LoginRequest {
            account_id: "alice".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    match result {
        Err(ClientError::Api { code, message }) => {
            assert_eq!(code, 400);
            assert_eq!(message, "Invalid password");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    // The transport succeeded; only the envelope reported failure
    assert_eq!(counter.successes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_register_posts_new_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "accountId": "grandpa",
            "username": "Joe",
            "password": "pw",
            "mode": "SENIOR",
            "age": 71
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Registration successful",
            "data": {"id": 9, "accountId": "grandpa", "username": "Joe", "mode": "SENIOR", "age": 71, "points": 0}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let user = client
        .register(&RegisterRequest {
            account_id: "grandpa".to_string(),
            username: "Joe".to_string(),
            password: "pw".to_string(),
            mode: UserMode::Senior,
            age: Some(71),
        })
        .await
        .unwrap();

    assert_eq!(user.id, Some(9));
    assert_eq!(user.mode, Some(UserMode::Senior));
}

#[tokio::test]
async fn test_get_user_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": {"id": 7, "accountId": "teen7", "username": "Sam", "mode": "TEENAGER"}
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let user = client.get_user(7).await.unwrap();
    assert_eq!(user.account_id, "teen7");
    assert_eq!(user.mode, Some(UserMode::Teenager));
}

#[tokio::test]
async fn test_invalid_json_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let (client, counter) = counting_client(mock_server.uri());

    let result: Result<Value, _> = client.get("/garbage").await;
    assert!(matches!(result, Err(ClientError::Decode(_))));
    assert_eq!(counter.failures.load(Ordering::SeqCst), 1);
    assert_eq!(counter.successes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_stalled_body_times_out_through_interceptor() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Headers arrive promptly, then the body stops after one byte
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await.unwrap();
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{",
            )
            .await
            .unwrap();
        socket.flush().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let counter = Arc::new(CountingInterceptor::default());
    let client = ApiClient::builder()
        .base_url(format!("http://{addr}"))
        .timeout(Duration::from_millis(300))
        .interceptor(counter.clone())
        .build()
        .unwrap();

    let result: Result<Value, _> = client.get("/stall").await;

    assert!(matches!(result, Err(ClientError::Timeout)), "{result:?}");
    assert_eq!(counter.failures.load(Ordering::SeqCst), 1);
    assert_eq!(counter.successes.load(Ordering::SeqCst), 0);
    server.abort();
}
