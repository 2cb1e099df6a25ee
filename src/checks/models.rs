use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::checks::predicates::{AnyHeader, RequiredFields};

/// Body of the create request. The server is expected to echo the name back.
#[derive(Clone, Debug, Serialize)]
pub struct StatusCheckRequest {
    pub client_name: String,
}

/// Fields the create response must carry for the check to pass.
pub const CREATE_RESPONSE_FIELDS: RequiredFields =
    RequiredFields(&["id", "client_name", "timestamp"]);

/// Cross-origin response headers of which at least one must be present.
pub const CORS_HEADERS: AnyHeader = AnyHeader(&[
    "access-control-allow-origin",
    "access-control-allow-methods",
    "access-control-allow-headers",
]);

/// Statuses accepted as a rejection of an invalid create payload.
pub const VALIDATION_STATUSES: [StatusCode; 2] =
    [StatusCode::BAD_REQUEST, StatusCode::UNPROCESSABLE_ENTITY];

/// Why a check did not pass.
///
/// Either kind is converted into a failing [`TestResult`] by the harness;
/// nothing here propagates past a check boundary.
///
/// [`TestResult`]: crate::report::TestResult
#[derive(Debug, Error)]
pub enum CheckError {
    /// The response was received but a predicate over it evaluated false.
    #[error("{0}")]
    Assertion(String),
    /// The request itself failed: connection error, timeout, or a body that
    /// could not be decoded as JSON.
    #[error("exception: {0}")]
    Transport(#[from] reqwest::Error),
}
