//! ReportPortal API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Launch operations are implemented as free functions grouped by resource
//! in the `models` modules.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::{ReportPortalError, Result};

const USER_AGENT: &str = concat!("reportportal-client/", env!("CARGO_PKG_VERSION"));

/// Low-level ReportPortal API client.
///
/// Holds the shared HTTP connection pool, the API base URL, the bearer
/// token, and the project the client operates on. Resource operations such
/// as [`get_launch`](crate::get_launch) take the client by reference; the
/// client itself keeps no per-call state.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use reportportal_client::ReportPortalClient;
///
/// # fn example() -> reportportal_client::Result<()> {
/// // Create from environment variables
/// let client = ReportPortalClient::from_env()?;
///
/// // Or configure manually
/// let client = ReportPortalClient::new(
///     "your-uuid-token",
///     "https://rp.example.com/api/v1",
///     "my_project",
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ReportPortalClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
    project: String,
}

impl std::fmt::Debug for ReportPortalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportPortalClient")
            .field("base_url", &self.base_url.as_str())
            .field("project", &self.project)
            .finish_non_exhaustive()
    }
}

impl ReportPortalClient {
    /// Create a client from environment variables.
    ///
    /// Uses `RP_UUID` for authentication, `RP_ENDPOINT` for the API base URL
    /// (e.g. `https://rp.example.com/api/v1`), and `RP_PROJECT` for the
    /// project name.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three variables is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("RP_UUID").map_err(|_| {
            ReportPortalError::ConfigMissing("RP_UUID environment variable not set".to_string())
        })?;

        let base_url = env::var("RP_ENDPOINT").map_err(|_| {
            ReportPortalError::ConfigMissing("RP_ENDPOINT environment variable not set".to_string())
        })?;

        let project = env::var("RP_PROJECT").map_err(|_| {
            ReportPortalError::ConfigMissing("RP_PROJECT environment variable not set".to_string())
        })?;

        Self::new(&token, &base_url, &project)
    }

    /// Create a new client with the provided token, base URL, and project.
    ///
    /// # Arguments
    ///
    /// * `token` - ReportPortal UUID access token
    /// * `base_url` - Base URL of the API (e.g. `https://rp.example.com/api/v1`)
    /// * `project` - Project name all requests are scoped to
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(token: &str, base_url: &str, project: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(ReportPortalError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
            project: project.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the project name requests are scoped to.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ReportPortalError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(ReportPortalError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(ReportPortalError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a POST request without a body.
    #[tracing::instrument(skip(self))]
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ReportPortalError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a PUT request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .put(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(ReportPortalError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a DELETE request.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .delete(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ReportPortalError::HttpError)?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(ReportPortalError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        // Error bodies look like {"error_code": 4041, "message": "..."}
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }

        if body.is_empty() {
            return format!("HTTP {status}");
        }

        body
    }
}
