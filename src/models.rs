use serde::{Deserialize, Serialize};

// ============ Request Model ============

/// The ordered pair of usernames identifying one comparison.
///
/// Created on form submit; immutable; used as the cache and request key.
/// Equality is exact: case-sensitive and untrimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComparisonRequest {
    /// First GitHub username (non-empty).
    pub username1: String,
    /// Second GitHub username (non-empty).
    pub username2: String,
}

impl ComparisonRequest {
    pub fn new(username1: impl Into<String>, username2: impl Into<String>) -> Self {
        Self {
            username1: username1.into(),
            username2: username2.into(),
        }
    }
}

// ============ Response Contract ============

/// The compatibility report returned by the backend.
///
/// Every field is required; deserialization fails on any missing or
/// wrong-typed field, so a value of this type has passed full structural
/// validation. Unknown extra fields are tolerated and dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// Short label for the kind of match (e.g. "Dynamic Duo").
    pub match_type: String,
    /// Narrative summary of the pairing.
    pub compatibility_summary: String,
    /// What the pair does well and where they can grow.
    pub strengths_and_opportunities: String,
    /// Suggested way for the two to work together.
    pub collaboration_plan: String,
    /// Closing encouragement line.
    pub motivational_message: String,
    /// Three narrative insight strings.
    pub valuable_insights: ValuableInsights,
}

/// Nested insights block of the report; all three fields required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuableInsights {
    pub activity_trends: String,
    pub repository_impact: String,
    pub follower_engagement: String,
}

// ============ Secondary Endpoints ============

/// Error body shape of a non-2xx comparison response.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
}

/// Subset of the GitHub user profile used for the avatar lookup.
#[derive(Debug, Deserialize)]
pub struct GitHubUser {
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_equality_is_case_sensitive_and_untrimmed() {
        let a = ComparisonRequest::new("octocat", "torvalds");
        let b = ComparisonRequest::new("ocTocat", "torvalds");
        let c = ComparisonRequest::new("octocat ", "torvalds");
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, ComparisonRequest::new("octocat", "torvalds"));
    }

    #[test]
    fn report_rejects_missing_nested_field() {
        let body = serde_json::json!({
            "match_type": "Dynamic Duo",
            "compatibility_summary": "s",
            "strengths_and_opportunities": "s",
            "collaboration_plan": "s",
            "motivational_message": "s",
            "valuable_insights": {
                "activity_trends": "s",
                "repository_impact": "s"
            }
        });
        assert!(serde_json::from_value::<CompatibilityReport>(body).is_err());
    }

    #[test]
    fn report_tolerates_unknown_fields() {
        let body = serde_json::json!({
            "match_type": "Dynamic Duo",
            "compatibility_summary": "s",
            "strengths_and_opportunities": "s",
            "collaboration_plan": "s",
            "motivational_message": "s",
            "generated_at": "2026-01-01",
            "valuable_insights": {
                "activity_trends": "a",
                "repository_impact": "b",
                "follower_engagement": "c"
            }
        });
        let report: CompatibilityReport = serde_json::from_value(body).unwrap();
        assert_eq!(report.valuable_insights.follower_engagement, "c");
    }
}
