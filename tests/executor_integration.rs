//! Integration tests for the request executor, driven through a scripted
//! in-memory transport.
//!
//! Each test builds an executor (or a full client) over a [`MockTransport`]
//! preloaded with outcomes, then asserts on the classified result and on
//! the requests the transport actually saw: attempt counts, headers, URLs.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::Deserialize;

use xrplsale_sdk::http::CancellationToken;
use xrplsale_sdk::prelude::*;

const API_KEY: &str = "test_api_key";

/// One scripted transport outcome.
enum Script {
    Respond(u16, Vec<(String, String)>, String),
    Fail(TransportError),
    /// Block until the caller cancels.
    Hang,
}

struct MockTransport {
    script: Mutex<VecDeque<Script>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    fn new(script: Vec<Script>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let item = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more times than scripted");
        match item {
            Script::Respond(status, headers, body) => Ok(TransportResponse {
                status,
                headers,
                body: body.into_bytes(),
            }),
            Script::Fail(e) => Err(e),
            Script::Hang => futures::future::pending().await,
        }
    }
}

fn ok(body: &str) -> Script {
    Script::Respond(200, Vec::new(), body.to_string())
}

fn config(max_retries: u32) -> ClientConfig {
    ClientConfig::builder(API_KEY)
        .environment(Environment::Testnet)
        .max_retries(max_retries)
        .base_delay(Duration::from_millis(5))
        .build()
        .expect("config should build")
}

fn executor(max_retries: u32, script: Vec<Script>) -> (XrplSaleHttp, Arc<MockTransport>) {
    let transport = MockTransport::new(script);
    let http = XrplSaleHttp::with_transport(config(max_retries), transport.clone());
    (http, transport)
}

fn client_with(script: Vec<Script>) -> (XrplSaleClient, Arc<MockTransport>) {
    let transport = MockTransport::new(script);
    let client = XrplSaleClient::builder(API_KEY)
        .environment(Environment::Testnet)
        .max_retries(2)
        .base_delay(Duration::from_millis(5))
        .webhook_secret("whsec_test")
        .transport(transport.clone())
        .build()
        .expect("client should build");
    (client, transport)
}

fn header<'a>(request: &'a TransportRequest, name: &str) -> Option<&'a str> {
    request
        .headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[derive(Debug, Deserialize, PartialEq)]
struct Proj {
    id: String,
}

// ─── Classification ──────────────────────────────────────────────────────────

#[tokio::test]
async fn http_error_is_terminal_and_never_retried() {
    let (http, transport) = executor(3, vec![Script::Respond(404, Vec::new(), String::new())]);

    let err = http
        .get::<Proj>("/projects/missing", Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::NotFound(_)));
    assert_eq!(transport.request_count(), 1, "a 404 must cost exactly one transport attempt");
}

#[tokio::test]
async fn rate_limit_is_terminal_and_carries_retry_after() {
    let (http, transport) = executor(
        3,
        vec![Script::Respond(
            429,
            vec![("Retry-After".to_string(), "30".to_string())],
            r#"{"message":"slow down"}"#.to_string(),
        )],
    );

    let err = http.get::<Proj>("/projects", Vec::new()).await.unwrap_err();

    match err {
        ApiError::RateLimited {
            retry_after_secs, ..
        } => assert_eq!(retry_after_secs, Some(30)),
        other => panic!("expected RateLimited, got {other:?}"),
    }
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn validation_error_carries_field_details() {
    let (client, _) = client_with(vec![Script::Respond(
        400,
        Vec::new(),
        r#"{"message":"invalid amount","details":[{"field":"amount_xrp","message":"must be positive"}]}"#
            .to_string(),
    )]);

    let request = CreateInvestmentRequest {
        project_id: "proj_1".to_string(),
        amount_xrp: "0".parse().unwrap(),
        wallet_address: "rInvestor1".to_string(),
    };
    let err = client.investments().create(&request).await.unwrap_err();

    match err {
        SdkError::Api(ApiError::Validation { message, details }) => {
            assert_eq!(message, "invalid amount");
            assert_eq!(details.len(), 1);
            assert_eq!(details[0].field, "amount_xrp");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_fatal() {
    let (http, _) = executor(0, vec![ok("{not json")]);
    let err = http.get::<Proj>("/projects/p1", Vec::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Deserialization(_)));
}

// ─── Retry policy ────────────────────────────────────────────────────────────

#[tokio::test]
async fn transport_failures_retry_then_succeed() {
    // maxRetries=2: fail, fail, then 200 on the third attempt.
    let (http, transport) = executor(
        2,
        vec![
            Script::Fail(TransportError::Timeout),
            Script::Fail(TransportError::Connect("refused".to_string())),
            ok(r#"{"id":"proj_1"}"#),
        ],
    );

    let started = Instant::now();
    let proj: Proj = http.get("/projects/proj_1", Vec::new()).await.unwrap();

    assert_eq!(proj.id, "proj_1");
    assert_eq!(transport.request_count(), 3);
    // Two backoff waits: ~base and ~2*base.
    assert!(started.elapsed() >= Duration::from_millis(10));
}

#[tokio::test]
async fn persistent_transport_failure_exhausts_budget() {
    let (http, transport) = executor(
        2,
        vec![
            Script::Fail(TransportError::Timeout),
            Script::Fail(TransportError::Timeout),
            Script::Fail(TransportError::Timeout),
        ],
    );

    let err = http.get::<Proj>("/projects", Vec::new()).await.unwrap_err();

    match err {
        ApiError::Transport { attempts, source } => {
            assert_eq!(attempts, 3, "total tries = max_retries + 1");
            assert!(matches!(source, TransportError::Timeout));
        }
        other => panic!("expected Transport, got {other:?}"),
    }
    assert_eq!(transport.request_count(), 3);
}

#[tokio::test]
async fn zero_retries_surfaces_first_failure() {
    let (http, transport) = executor(0, vec![Script::Fail(TransportError::Timeout)]);

    let err = http.get::<Proj>("/projects", Vec::new()).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { attempts: 1, .. }));
    assert_eq!(transport.request_count(), 1);
}

// ─── Headers and URL construction ────────────────────────────────────────────

#[tokio::test]
async fn api_key_header_is_sent_until_a_bearer_token_is_set() {
    let (client, transport) = client_with(vec![
        ok(r#"{"id":"proj_1","name":"Demo","token_currency":"DMO","issuer_address":"rIssuer1","status":"active","total_supply":"1000000","raised_xrp":"50000","investor_count":12,"created_at":"2026-01-10T12:00:00Z"}"#),
        ok(r#"{"id":"proj_1","name":"Demo","token_currency":"DMO","issuer_address":"rIssuer1","status":"active","total_supply":"1000000","raised_xrp":"50000","investor_count":12,"created_at":"2026-01-10T12:00:00Z"}"#),
    ]);

    client.projects().get("proj_1").await.unwrap();
    client.auth().set_token("tok_123").await;
    client.projects().get("proj_1").await.unwrap();

    let requests = transport.requests();
    assert_eq!(header(&requests[0], "X-API-Key"), Some(API_KEY));
    assert_eq!(header(&requests[0], "Authorization"), None);
    assert_eq!(header(&requests[0], "Accept"), Some("application/json"));
    assert!(header(&requests[0], "User-Agent")
        .unwrap()
        .starts_with("xrplsale-sdk-rust/"));

    // Bearer supersedes the API key even though the config still has one.
    assert_eq!(header(&requests[1], "Authorization"), Some("Bearer tok_123"));
    assert_eq!(header(&requests[1], "X-API-Key"), None);
}

#[tokio::test]
async fn login_stores_bearer_token_and_session() {
    let (client, transport) = client_with(vec![
        ok(r#"{"token":"tok_live","wallet_address":"rWallet1","expires_at":"2030-01-01T00:00:00Z"}"#),
        Script::Respond(204, Vec::new(), String::new()),
    ]);

    let session = client
        .auth()
        .login("rWallet1", "deadbeef", "xrplsale-auth-42")
        .await
        .unwrap();
    assert_eq!(session.token, "tok_live");
    assert!(client.auth().is_authenticated().await);

    client.webhooks().delete("wh_1").await.unwrap();

    let requests = transport.requests();
    // Login itself authenticates with the API key.
    assert_eq!(header(&requests[0], "X-API-Key"), Some(API_KEY));
    assert_eq!(header(&requests[1], "Authorization"), Some("Bearer tok_live"));

    client.auth().clear_token().await;
    assert!(!client.auth().is_authenticated().await);
}

#[tokio::test]
async fn urls_resolve_environment_and_ordered_query() {
    let (client, transport) = client_with(vec![ok(
        r#"{"projects":[],"pagination":{"page":2,"limit":10,"total":0,"total_pages":0}}"#,
    )]);

    let options = ListProjectsOptions {
        status: Some(ProjectStatus::Active),
        page: Some(2),
        limit: Some(10),
        sort_order: Some(SortOrder::Desc),
    };
    client.projects().list(options).await.unwrap();

    let requests = transport.requests();
    assert_eq!(
        requests[0].url,
        "https://api-testnet.xrpl.sale/v1/projects?status=active&page=2&limit=10&sort_order=desc"
    );
    assert_eq!(requests[0].method, Method::Get);
}

#[tokio::test]
async fn request_bodies_are_json_with_content_type() {
    let (client, transport) = client_with(vec![ok(
        r#"{"id":"inv_1","project_id":"proj_1","wallet_address":"rInvestor1","amount_xrp":"250","status":"pending","created_at":"2026-02-01T09:30:00Z"}"#,
    )]);

    let request = CreateInvestmentRequest {
        project_id: "proj_1".to_string(),
        amount_xrp: "250".parse().unwrap(),
        wallet_address: "rInvestor1".to_string(),
    };
    let investment = client.investments().create(&request).await.unwrap();
    assert_eq!(investment.status, InvestmentStatus::Pending);

    let requests = transport.requests();
    assert_eq!(header(&requests[0], "Content-Type"), Some("application/json"));
    let body: serde_json::Value =
        serde_json::from_slice(requests[0].body.as_ref().unwrap()).unwrap();
    assert_eq!(body["project_id"], "proj_1");
    assert_eq!(body["amount_xrp"], "250");
    assert_eq!(body["wallet_address"], "rInvestor1");
}

// ─── Empty success bodies ────────────────────────────────────────────────────

#[tokio::test]
async fn empty_success_body_is_fine_for_unit_endpoints() {
    let (client, _) = client_with(vec![Script::Respond(204, Vec::new(), String::new())]);
    client.webhooks().delete("wh_1").await.unwrap();
}

#[tokio::test]
async fn empty_success_body_is_fatal_for_object_endpoints() {
    let (http, _) = executor(0, vec![Script::Respond(200, Vec::new(), String::new())]);
    let err = http.get::<Proj>("/projects/p1", Vec::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Deserialization(_)));
}

// ─── Cancellation and disposal ───────────────────────────────────────────────

#[tokio::test]
async fn cancellation_aborts_in_flight_transport_wait() {
    let (http, transport) = executor(3, vec![Script::Hang]);

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let err = http
        .execute_with_token::<Proj>(RequestSpec::get("/projects/p1"), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Cancelled));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn cancellation_skips_pending_retry_delay() {
    let transport = MockTransport::new(vec![Script::Fail(TransportError::Timeout)]);
    let config = ClientConfig::builder(API_KEY)
        .environment(Environment::Testnet)
        .max_retries(3)
        .base_delay(Duration::from_secs(60))
        .build()
        .unwrap();
    let http = XrplSaleHttp::with_transport(config, transport.clone());

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let err = http
        .execute_with_token::<Proj>(RequestSpec::get("/projects"), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Cancelled));
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "cancellation must not wait out the backoff delay"
    );
    assert_eq!(transport.request_count(), 1, "no retry after cancellation");
}

#[tokio::test]
async fn closed_client_fails_fast() {
    let (client, transport) = client_with(vec![ok(r#"{"total_projects":1,"active_projects":1,"total_raised_xrp":"100","total_investors":3}"#)]);

    client.analytics().platform().await.unwrap();
    client.close();
    assert!(client.is_closed());

    let err = client.analytics().platform().await.unwrap_err();
    assert!(matches!(err, SdkError::Api(ApiError::ClientClosed)));
    assert_eq!(transport.request_count(), 1, "no transport call after close");
}

#[tokio::test]
async fn close_aborts_in_flight_requests() {
    let (http, _) = executor(3, vec![Script::Hang]);

    let closer = http.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        closer.close();
    });

    let err = http
        .execute::<Proj>(RequestSpec::get("/projects"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::ClientClosed));
}

// ─── Webhooks through the client ─────────────────────────────────────────────

#[tokio::test]
async fn webhook_verification_uses_configured_secret() {
    let (client, _) = client_with(Vec::new());

    let payload = br#"{"type":"project.launched","data":{"project_id":"proj_1"}}"#;
    let signature = sign(payload, "whsec_test");

    assert!(client.webhooks().verify_signature(payload, &signature));
    let event = client.webhooks().construct_event(payload, &signature).unwrap();
    assert_eq!(event.event_type, "project.launched");
    assert_eq!(event.data["project_id"], "proj_1");

    assert!(!client.webhooks().verify_signature(payload, "sha256=deadbeef"));
    assert!(matches!(
        client.webhooks().construct_event(payload, "sha256=deadbeef"),
        Err(WebhookError::InvalidSignature)
    ));
}

fn sign(payload: &[u8], secret: &str) -> String {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(payload);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}
