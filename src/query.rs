use crate::errors::CompareError;
use crate::models::{ComparisonRequest, CompatibilityReport};
use crate::services::CompatibilityService;
use moka::future::Cache;
use std::sync::Arc;

/// Observable state of the current comparison, as seen by the UI.
///
/// Exactly one of these holds at any time.
#[derive(Debug, Clone)]
pub enum QueryState {
    /// No request submitted yet.
    Idle,
    /// A request is in flight.
    Pending,
    /// The request settled with a validated report.
    Resolved(CompatibilityReport),
    /// The request settled with a user-visible error message.
    Failed(String),
}

/// Request-keyed memoization of comparison outcomes.
///
/// Successful reports are cached for the session, keyed by exact pair
/// equality. Concurrent submissions for the same key coalesce into one
/// in-flight call via `try_get_with`; failures are not cached, so an
/// identical resubmission after a failure re-issues the request.
#[derive(Clone)]
pub struct ComparisonCache {
    cache: Cache<ComparisonRequest, CompatibilityReport>,
    service: CompatibilityService,
}

impl ComparisonCache {
    pub fn new(service: CompatibilityService) -> Self {
        let cache = Cache::builder().max_capacity(1_000).build();
        Self { cache, service }
    }

    /// Return the cached report for `request`, joining an in-flight call for
    /// the same key if one exists, or issuing a new one otherwise.
    pub async fn get_or_fetch(
        &self,
        request: &ComparisonRequest,
    ) -> Result<CompatibilityReport, Arc<CompareError>> {
        if let Some(report) = self.cache.get(request).await {
            tracing::debug!(
                "Cache hit: {} vs {}",
                request.username1,
                request.username2
            );
            return Ok(report);
        }

        self.cache
            .try_get_with(request.clone(), async {
                tracing::debug!(
                    "Cache miss, dispatching: {} vs {}",
                    request.username1,
                    request.username2
                );
                self.service
                    .compare(&request.username1, &request.username2)
                    .await
            })
            .await
    }
}
