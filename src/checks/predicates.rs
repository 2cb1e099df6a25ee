//! Declarative response predicates shared by the checks.
//!
//! Field and header expectations are described as data and evaluated
//! uniformly instead of being spelled out as ad hoc boolean expressions in
//! each check.

use reqwest::header::HeaderMap;
use serde_json::Value;

/// Field names that must all be present at the top level of a JSON body.
#[derive(Clone, Copy, Debug)]
pub struct RequiredFields(pub &'static [&'static str]);

impl RequiredFields {
    /// Returns the subset of required fields absent from `body`, in
    /// declaration order. Empty means the predicate holds.
    pub fn missing_from(&self, body: &Value) -> Vec<&'static str> {
        self.0
            .iter()
            .filter(|field| body.get(**field).is_none())
            .copied()
            .collect()
    }
}

/// Header names of which at least one must be present in a response.
#[derive(Clone, Copy, Debug)]
pub struct AnyHeader(pub &'static [&'static str]);

impl AnyHeader {
    /// Returns the first declared header present in `headers`, if any.
    /// Lookup is case-insensitive per HTTP header semantics.
    pub fn first_present(&self, headers: &HeaderMap) -> Option<&'static str> {
        self.0
            .iter()
            .find(|name| headers.contains_key(**name))
            .copied()
    }
}
