//! Shared test utilities for `statusprobe` integration tests.
//!
//! This module provides a builder for mocking the status-check API surface
//! the probe exercises, plus helpers for pointing a harness at the mock and
//! initializing tracing.

// Allow dead code since not all test files use all helpers
#![allow(dead_code)]

use chrono::Utc;
use serde_json::{json, Value};
use statusprobe::checks::Harness;
use statusprobe::client::ApiClient;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches a JSON request body carrying the given top-level field.
pub struct HasField(pub &'static str);

impl Match for HasField {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<Value>(&request.body)
            .map(|body| body.get(self.0).is_some())
            .unwrap_or(false)
    }
}

/// Builder for setting up a mock status-check API.
pub struct MockApiBuilder {
    server: MockServer,
}

impl MockApiBuilder {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Mounts the full healthy API surface: greeting root, echoing create
    /// endpoint, empty list, permissive CORS preflight, and empty-payload
    /// rejection. Unknown paths return 404 by mock server default.
    pub async fn healthy(self) -> Self {
        self.with_root_greeting("Hello World")
            .await
            .with_echoing_create()
            .await
            .with_status_list(json!([]))
            .await
            .with_cors_preflight(&["access-control-allow-origin"])
            .await
            .with_empty_payload_rejection(422)
            .await
    }

    pub async fn with_root_greeting(self, message: &str) -> Self {
        Mock::given(method("GET"))
            .and(path("/api/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": message })))
            .mount(&self.server)
            .await;
        self
    }

    pub async fn with_root_status(self, status: u16) -> Self {
        Mock::given(method("GET"))
            .and(path("/api/"))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream error"))
            .mount(&self.server)
            .await;
        self
    }

    /// Create endpoint that echoes the submitted `client_name` back with a
    /// fresh id and timestamp, the way a healthy API behaves.
    pub async fn with_echoing_create(self) -> Self {
        Mock::given(method("POST"))
            .and(path("/api/status"))
            .and(HasField("client_name"))
            .respond_with(|request: &Request| {
                let body: Value =
                    serde_json::from_slice(&request.body).expect("parse create request body");
                ResponseTemplate::new(200).set_body_json(json!({
                    "id": "3fa2b7de-9c61-4a07-b2f4-5f1f1d2a9c4e",
                    "client_name": body["client_name"],
                    "timestamp": Utc::now().to_rfc3339(),
                }))
            })
            .mount(&self.server)
            .await;
        self
    }

    /// Create endpoint with a canned response, for failure scenarios.
    pub async fn with_create_response(self, status: u16, body: Value) -> Self {
        Mock::given(method("POST"))
            .and(path("/api/status"))
            .and(HasField("client_name"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
        self
    }

    pub async fn with_status_list(self, body: Value) -> Self {
        Mock::given(method("GET"))
            .and(path("/api/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
        self
    }

    /// Preflight response carrying the given cross-origin headers. Pass an
    /// empty slice for a preflight with no CORS headers at all.
    pub async fn with_cors_preflight(self, headers: &[&str]) -> Self {
        let mut template = ResponseTemplate::new(200);
        for header in headers {
            template = template.insert_header(*header, "*");
        }
        Mock::given(method("OPTIONS"))
            .and(path("/api/"))
            .respond_with(template)
            .mount(&self.server)
            .await;
        self
    }

    /// Response status for a `POST /api/status` with an empty JSON body.
    pub async fn with_empty_payload_rejection(self, status: u16) -> Self {
        Mock::given(method("POST"))
            .and(path("/api/status"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
        self
    }

    /// Mounts an arbitrary route, for overriding default behavior (e.g. an
    /// unknown path that unexpectedly answers 200).
    pub async fn with_route(self, verb: &str, route: &str, template: ResponseTemplate) -> Self {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(template)
            .mount(&self.server)
            .await;
        self
    }

    pub fn build(self) -> MockApi {
        MockApi {
            server: self.server,
        }
    }
}

/// A configured mock status-check API ready for probing.
pub struct MockApi {
    server: MockServer,
}

impl MockApi {
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Creates a harness pointed at this mock API.
    pub fn harness(&self) -> Harness {
        Harness::new(ApiClient::new(self.uri()).expect("create api client"))
    }
}

/// Base URL of an address nothing is listening on, for transport-failure
/// scenarios.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Initialize tracing for tests (only once).
///
/// Defaults to `warn` level to reduce noise. Use `RUST_LOG=debug` for verbose output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_test_writer()
        .try_init();
}
