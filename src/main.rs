use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gitmatch::config::Config;
use gitmatch::query::ComparisonCache;
use gitmatch::services::{build_http_client, CompatibilityService, GitHubProfileService};
use gitmatch::tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout hosts the alternate screen.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gitmatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Configuration loaded: backend={}, github={}, timeout={}s",
        config.backend_base_url,
        config.github_api_url,
        config.http_timeout.as_secs()
    );

    let client = build_http_client(config.http_timeout)?;
    let compatibility = CompatibilityService::new(client.clone(), config.backend_base_url.clone());
    let profiles = GitHubProfileService::new(client, config.github_api_url.clone());
    let cache = ComparisonCache::new(compatibility);

    tui::run(cache, profiles).await
}
