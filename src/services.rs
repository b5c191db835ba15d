use crate::errors::CompareError;
use crate::models::{ApiErrorBody, CompatibilityReport, GitHubUser};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Surfaced when a non-2xx comparison response carries no usable `detail`.
pub const COMPARE_ERROR_FALLBACK: &str = "Failed to compare users";

/// Builds the shared HTTP client.
///
/// The GitHub API rejects requests without a `User-Agent` header, so one is
/// always sent.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("gitmatch/0.1"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Client::builder().default_headers(headers).timeout(timeout).build()
}

/// Client for the GitMatch compatibility endpoint.
#[derive(Clone)]
pub struct CompatibilityService {
    client: Client,
    base_url: String,
}

impl CompatibilityService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the compatibility report for a pair of usernames.
    ///
    /// Single attempt, no retries. Empty usernames are rejected before any
    /// network call is issued (the form checks too; this is the boundary's
    /// own check). A 2xx body is deserialized into the full
    /// [`CompatibilityReport`] contract, so a partially valid response never
    /// escapes as a value.
    pub async fn compare(
        &self,
        username1: &str,
        username2: &str,
    ) -> Result<CompatibilityReport, CompareError> {
        if username1.is_empty() || username2.is_empty() {
            return Err(CompareError::InvalidInput(
                "Both usernames are required".to_string(),
            ));
        }

        // parse_with_params percent-encodes both usernames into the query.
        let url = Url::parse_with_params(
            &format!("{}/analyze-compatibility", self.base_url),
            &[("username1", username1), ("username2", username2)],
        )
        .map_err(|e| CompareError::InvalidInput(format!("Failed to build URL: {}", e)))?;

        tracing::debug!("Requesting comparison: {} vs {}", username1, username2);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .filter(|detail| !detail.is_empty())
                .unwrap_or_else(|| COMPARE_ERROR_FALLBACK.to_string());
            tracing::warn!("Comparison endpoint returned {}: {}", status, message);
            return Err(CompareError::Api { status, message });
        }

        // A transport error converts to Network, a decode error to Schema.
        let report: CompatibilityReport = response.json().await?;

        tracing::debug!("Comparison resolved: {}", report.match_type);
        Ok(report)
    }
}

/// Best-effort client for the public GitHub user endpoint.
#[derive(Clone)]
pub struct GitHubProfileService {
    client: Client,
    base_url: String,
}

impl GitHubProfileService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the avatar URL for a username.
    ///
    /// Every failure mode (transport, non-2xx, malformed body, missing
    /// `avatar_url`) collapses to `None`; nothing here may affect the
    /// primary comparison flow.
    pub async fn fetch_avatar(&self, username: &str) -> Option<String> {
        let url = format!("{}/users/{}", self.base_url, username);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Avatar lookup for '{}' failed: {}", username, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(
                "Avatar lookup for '{}' returned {}",
                username,
                response.status()
            );
            return None;
        }

        match response.json::<GitHubUser>().await {
            Ok(user) => user.avatar_url.filter(|avatar| !avatar.is_empty()),
            Err(e) => {
                tracing::debug!("Avatar lookup for '{}' unparseable: {}", username, e);
                None
            }
        }
    }
}
