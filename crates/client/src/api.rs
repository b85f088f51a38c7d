//! HTTP transport for the Jenkins endpoints.
//!
//! Wraps the two endpoints this library talks to (the script console
//! and item creation) using [`reqwest`], applying basic auth when
//! credentials are configured. One best-effort request per call: no
//! retries, and timeouts are whatever the underlying client enforces.

use crate::config::Credentials;

/// Path of the script console endpoint (returns `println` output as plain text).
pub const SCRIPT_CONSOLE_PATH: &str = "/scriptText";

/// Path of the item-creation endpoint (XML request body).
pub const CREATE_ITEM_PATH: &str = "/createItem";

/// Form field carrying the Groovy source on script submissions.
const SCRIPT_FIELD: &str = "script";

/// Query parameter carrying the item name on create-item requests.
const NAME_PARAM: &str = "name";

/// HTTP client for a single Jenkins server.
pub struct JenkinsApi {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
}

/// Errors from the Jenkins HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Jenkins returned a non-2xx status code.
    #[error("Jenkins API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl JenkinsApi {
    /// Create a new API client for a Jenkins server.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://host:8080`. Trailing
    ///   slashes are stripped.
    /// * `credentials` - Basic-auth credentials, or `None` for
    ///   anonymous access.
    pub fn new(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, credentials)
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple servers).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        credentials: Option<Credentials>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client,
            base_url,
            credentials,
        }
    }

    /// Base HTTP URL of the server (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a script to the script console and return its printed output.
    ///
    /// Sends a `POST /scriptText` request with the source form-encoded
    /// under the `script` field. The console responds with whatever
    /// the script printed, as plain text.
    pub async fn run_script(&self, script: &str) -> Result<String, ApiError> {
        let response = self
            .authenticated(
                self.client
                    .post(format!("{}{}", self.base_url, SCRIPT_CONSOLE_PATH)),
            )
            .form(&[(SCRIPT_FIELD, script)])
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.text().await?)
    }

    /// Create a named item from an XML configuration document.
    ///
    /// Sends a `POST /createItem?name=<name>` request with the raw
    /// `config.xml` body.
    pub async fn create_item(&self, name: &str, config_xml: String) -> Result<(), ApiError> {
        let response = self
            .authenticated(
                self.client
                    .post(format!("{}{}", self.base_url, CREATE_ITEM_PATH)),
            )
            .query(&[(NAME_PARAM, name)])
            .header(reqwest::header::CONTENT_TYPE, "application/xml")
            .body(config_xml)
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Apply basic auth when credentials are configured.
    fn authenticated(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some(credentials) => {
                request.basic_auth(&credentials.username, Some(&credentials.api_token))
            }
            None => request,
        }
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
