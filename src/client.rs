use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use tracing::debug;

const USER_AGENT: &str = concat!("statusprobe/", env!("CARGO_PKG_VERSION"));

/// HTTP session bound to the base URL of the API under probe.
///
/// All requests share one underlying connection pool and carry a JSON
/// content-type by default. No timeout is configured beyond the client
/// defaults; a hung endpoint blocks only the check that hit it.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Creates a session for the given base URL. The URL is expected to be
    /// normalized already (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .context("building HTTP client failed")?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<Response> {
        let url = self.url(path);
        debug!(%url, "GET");
        self.client.get(&url).send().await
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> reqwest::Result<Response> {
        let url = self.url(path);
        debug!(%url, "POST");
        self.client.post(&url).json(body).send().await
    }

    pub async fn options(&self, path: &str) -> reqwest::Result<Response> {
        let url = self.url(path);
        debug!(%url, "OPTIONS");
        self.client.request(Method::OPTIONS, &url).send().await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
