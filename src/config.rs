use std::time::Duration;

/// Default base URL of the compatibility backend.
pub const DEFAULT_BACKEND_URL: &str = "https://gitmatch-backend.vercel.app";

/// Default base URL of the public GitHub API (avatar lookups).
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the compatibility endpoint.
    pub backend_base_url: String,
    /// Base URL of the GitHub API. Overridable so tests can point at a mock.
    pub github_api_url: String,
    /// Timeout applied to the shared HTTP client.
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let backend_base_url = base_url_from(
            "GITMATCH_BACKEND_URL",
            std::env::var("GITMATCH_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.into()),
        )?;

        let github_api_url = base_url_from(
            "GITHUB_API_URL",
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.into()),
        )?;

        let http_timeout = std::env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| anyhow::anyhow!("HTTP_TIMEOUT_SECS must be a whole number of seconds"))?;

        Ok(Self {
            backend_base_url,
            github_api_url,
            http_timeout,
        })
    }
}

/// Validates the scheme and trims trailing slashes from a base URL value.
fn base_url_from(var: &str, value: String) -> anyhow::Result<String> {
    if !value.starts_with("http://") && !value.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", var);
    }
    Ok(value.trim_end_matches('/').to_string())
}
