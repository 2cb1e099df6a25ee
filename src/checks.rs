//! The probe harness: a fixed, ordered sequence of request/assert checks
//! against the status-check API.

pub mod models;
pub mod predicates;

use chrono::Utc;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::checks::models::{
    CheckError, StatusCheckRequest, CORS_HEADERS, CREATE_RESPONSE_FIELDS, VALIDATION_STATUSES,
};
use crate::client::ApiClient;
use crate::report::{self, RunSummary, TestResult};

/// Number of checks in a full run.
pub const CHECK_COUNT: usize = 6;

const EXPECTED_GREETING: &str = "Hello World";

/// Successful outcome of the create check. The id is surfaced so follow-up
/// checks can chain on the created resource; none consume it yet.
struct CreatedStatus {
    details: String,
    id: Option<String>,
}

/// Owns the HTTP session and runs the checks strictly in sequence.
///
/// Every check produces exactly one [`TestResult`], whether the predicate
/// failed or the request itself did; no fault aborts the run.
pub struct Harness {
    client: ApiClient,
}

impl Harness {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Runs the full sequence, prints the console report, and returns the
    /// process exit code: 0 iff every check passed.
    pub async fn run_all_tests(&self) -> i32 {
        report::print_banner(self.client.base_url());

        let results = self.run_checks().await;
        let summary: RunSummary = results.iter().collect();

        report::print_summary(&summary);
        summary.exit_code()
    }

    /// Runs the checks in their fixed order, printing one line per check and
    /// returning the ordered results.
    pub async fn run_checks(&self) -> Vec<TestResult> {
        let mut results = Vec::with_capacity(CHECK_COUNT);

        results.push(record("Root Endpoint", self.check_root().await));

        let created = self.check_create().await;
        // Kept for chaining follow-up checks on the created resource.
        let _created_id = created.as_ref().ok().and_then(|c| c.id.clone());
        results.push(record("Create Status Check", created.map(|c| c.details)));

        results.push(record("List Status Checks", self.check_list().await));
        results.push(record("CORS Headers", self.check_cors().await));
        results.push(record("Unknown Route", self.check_unknown_route().await));
        results.push(record("Payload Validation", self.check_validation().await));

        results
    }

    async fn check_root(&self) -> Result<String, CheckError> {
        let resp = self.client.get("/api/").await?;
        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await?;
            return Err(CheckError::Assertion(format!(
                "status: {status}, error: {body}"
            )));
        }

        let body: Value = resp.json().await?;
        if body.get("message").and_then(Value::as_str) != Some(EXPECTED_GREETING) {
            return Err(CheckError::Assertion(format!(
                "status: {status}, unexpected response: {body}"
            )));
        }

        Ok(format!("status: {status}, response: {body}"))
    }

    async fn check_create(&self) -> Result<CreatedStatus, CheckError> {
        let request = StatusCheckRequest {
            client_name: fresh_client_name(),
        };

        let resp = self.client.post_json("/api/status", &request).await?;
        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await?;
            return Err(CheckError::Assertion(format!(
                "status: {status}, error: {body}"
            )));
        }

        let body: Value = resp.json().await?;
        let missing = CREATE_RESPONSE_FIELDS.missing_from(&body);
        if !missing.is_empty() {
            return Err(CheckError::Assertion(format!(
                "response missing fields: {}",
                missing.join(", ")
            )));
        }

        let echoed = body.get("client_name").and_then(Value::as_str);
        if echoed != Some(request.client_name.as_str()) {
            return Err(CheckError::Assertion(format!(
                "client_name not echoed: sent {:?}, got {:?}",
                request.client_name, echoed
            )));
        }

        let id = body.get("id").and_then(Value::as_str).map(str::to_string);
        let details = format!(
            "status: {status}, created id: {}",
            id.as_deref().unwrap_or("n/a")
        );

        Ok(CreatedStatus { details, id })
    }

    async fn check_list(&self) -> Result<String, CheckError> {
        let resp = self.client.get("/api/status").await?;
        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await?;
            return Err(CheckError::Assertion(format!(
                "status: {status}, error: {body}"
            )));
        }

        let body: Value = resp.json().await?;
        match body.as_array() {
            Some(items) => Ok(format!("status: {status}, count: {}", items.len())),
            None => Err(CheckError::Assertion(format!(
                "expected a JSON array, got: {body}"
            ))),
        }
    }

    async fn check_cors(&self) -> Result<String, CheckError> {
        let resp = self.client.options("/api/").await?;
        match CORS_HEADERS.first_present(resp.headers()) {
            Some(header) => Ok(format!("{header} present")),
            None => Err(CheckError::Assertion(
                "no cross-origin headers present".to_string(),
            )),
        }
    }

    async fn check_unknown_route(&self) -> Result<String, CheckError> {
        let resp = self.client.get("/api/nonexistent").await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            Ok(format!("unknown path returned {status}"))
        } else {
            Err(CheckError::Assertion(format!(
                "expected 404 for unknown path, got {status}"
            )))
        }
    }

    async fn check_validation(&self) -> Result<String, CheckError> {
        let resp = self.client.post_json("/api/status", &json!({})).await?;
        let status = resp.status();
        if VALIDATION_STATUSES.contains(&status) {
            Ok(format!("empty payload rejected with {status}"))
        } else {
            Err(CheckError::Assertion(format!(
                "expected 400 or 422 for empty payload, got {status}"
            )))
        }
    }
}

/// Converts a check outcome into its result record and prints the console
/// line. This is the only place a [`CheckError`] is consumed, so no fault
/// escapes the harness boundary.
fn record(name: &str, outcome: Result<String, CheckError>) -> TestResult {
    let result = match outcome {
        Ok(details) => TestResult::pass(name, format!("- {details}")),
        Err(err) => TestResult::fail(name, format!("- {err}")),
    };
    report::print_outcome(&result);
    result
}

fn fresh_client_name() -> String {
    format!("probe_client_{}", Utc::now().format("%H%M%S"))
}
