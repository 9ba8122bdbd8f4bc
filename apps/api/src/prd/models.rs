use serde::{Deserialize, Serialize};

/// Request body for POST /api/generate-prd.
#[derive(Debug, Clone, Deserialize)]
pub struct PRDRequest {
    pub feature_idea: String,
    pub target_audience: String,
    /// Optional; an empty statement leaves the model to infer the problem.
    #[serde(default)]
    pub problem_statement: String,
}

/// Structured PRD assembled from one LLM reply.
/// `prd_document` always carries the full raw reply; the list fields are
/// best-effort extractions with canned fallbacks.
#[derive(Debug, Clone, Serialize)]
pub struct PRDResponse {
    pub prd_document: String,
    pub user_stories: Vec<String>,
    pub success_metrics: Vec<String>,
    pub timeline: String,
    pub risks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_statement_defaults_to_empty() {
        let request: PRDRequest = serde_json::from_str(
            r#"{"feature_idea": "dark mode", "target_audience": "night owls"}"#,
        )
        .unwrap();
        assert_eq!(request.feature_idea, "dark mode");
        assert_eq!(request.problem_statement, "");
    }
}
