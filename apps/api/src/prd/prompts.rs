// All LLM prompt constants for the PRD tool.
// Headings named here are the same constants the extractor matches on, so a
// wording change breaks the tests on both sides instead of silently one.

use crate::llm_client::SamplingParams;
use crate::prd::models::PRDRequest;

/// System prompt for PRD generation.
pub const PRD_SYSTEM: &str =
    "You are an expert Product Manager with 15+ years experience. \
    Generate professional PRDs that are clear, actionable, and business-focused.";

/// Sampling for PRD generation. Warmer than the API doc tool so the
/// document reads less boilerplate-heavy.
pub const PRD_SAMPLING: SamplingParams = SamplingParams {
    temperature: 0.3,
    max_tokens: 2500,
    top_p: 0.9,
};

pub const USER_STORIES_HEADING: &str = "User Stories";
pub const SUCCESS_METRICS_HEADING: &str = "Success Metrics";
pub const TIMELINE_HEADING: &str = "Timeline";
pub const RISKS_HEADING: &str = "Risks";

/// Separator the model is told to place between sections.
pub const SECTION_SEPARATOR: &str = "---";

/// PRD prompt template. Replace: {feature_idea}, {target_audience},
/// {problem_statement} plus the heading and separator placeholders.
const PRD_PROMPT_TEMPLATE: &str = r#"You are an expert Product Manager. Generate a comprehensive PRD (Product Requirements Document) for this feature.

FEATURE IDEA: {feature_idea}

TARGET AUDIENCE: {target_audience}

PROBLEM STATEMENT: {problem_statement}

Generate the following sections:

## 📋 PRD Document
[Complete PRD with:
- Overview
- Problem Statement
- Solution
- User Benefits
- Success Criteria
- Risks & Mitigation
- Implementation Timeline]

## 👤 {user_stories_heading}
- As a [user], I want [feature] so that [benefit]
[3-5 user stories]

## 📊 {success_metrics_heading}
- Metric 1: [Description and target]
- Metric 2: [Description and target]
[3-5 metrics]

## ⏱️ {timeline_heading}
[Estimated weeks to implement]

## ⚠️ {risks_heading}
- Risk 1: [Description] → Mitigation: [How to handle]
[3-5 risks]

Format with clear sections separated by {separator}"#;

/// Fills the PRD template. Static placeholders go first so user-supplied
/// text is never re-scanned for them.
pub fn build_prd_prompt(request: &PRDRequest) -> String {
    PRD_PROMPT_TEMPLATE
        .replace("{user_stories_heading}", USER_STORIES_HEADING)
        .replace("{success_metrics_heading}", SUCCESS_METRICS_HEADING)
        .replace("{timeline_heading}", TIMELINE_HEADING)
        .replace("{risks_heading}", RISKS_HEADING)
        .replace("{separator}", SECTION_SEPARATOR)
        .replace("{feature_idea}", &request.feature_idea)
        .replace("{target_audience}", &request.target_audience)
        .replace("{problem_statement}", &request.problem_statement)
}
