//! Turns one raw PRD reply into a `PRDResponse`.
//!
//! The full reply is always preserved as `prd_document`. Each list field is a
//! best-effort extraction; when a section is missing or empty the canned
//! fallback below is substituted so no field ever reaches the client empty.

use std::sync::LazyLock;

use regex::Regex;

use crate::prd::models::PRDResponse;
use crate::prd::prompts::{
    RISKS_HEADING, SECTION_SEPARATOR, SUCCESS_METRICS_HEADING, TIMELINE_HEADING,
    USER_STORIES_HEADING,
};
use crate::sections::{bullet_lines, heading_pattern, section_block};

/// At most this many items are kept per extracted list.
const MAX_LIST_ITEMS: usize = 5;
/// Bullets in the stories section that do not read like a user story are dropped.
const USER_STORY_PREFIX: &str = "As a";

const FALLBACK_USER_STORIES: &[&str] =
    &["As a user, I want this feature so I can achieve my goals"];
const FALLBACK_SUCCESS_METRICS: &[&str] = &["Adoption rate", "User engagement", "Time saved"];
const FALLBACK_TIMELINE: &str = "2-4 weeks";
const FALLBACK_RISKS: &[&str] = &["Technical complexity", "User adoption", "Timeline risk"];

static USER_STORIES: LazyLock<Regex> = LazyLock::new(|| heading_pattern(USER_STORIES_HEADING));
static SUCCESS_METRICS: LazyLock<Regex> =
    LazyLock::new(|| heading_pattern(SUCCESS_METRICS_HEADING));
static TIMELINE: LazyLock<Regex> = LazyLock::new(|| heading_pattern(TIMELINE_HEADING));
static RISKS: LazyLock<Regex> = LazyLock::new(|| heading_pattern(RISKS_HEADING));

pub fn assemble_prd_response(raw: &str) -> PRDResponse {
    PRDResponse {
        prd_document: raw.to_string(),
        user_stories: extract_user_stories(raw),
        success_metrics: extract_bullets(raw, &SUCCESS_METRICS, FALLBACK_SUCCESS_METRICS),
        timeline: extract_timeline(raw),
        risks: extract_bullets(raw, &RISKS, FALLBACK_RISKS),
    }
}

fn extract_user_stories(raw: &str) -> Vec<String> {
    let stories: Vec<String> = section_block(raw, &USER_STORIES, SECTION_SEPARATOR)
        .map(bullet_lines)
        .unwrap_or_default()
        .into_iter()
        .filter(|story| story.starts_with(USER_STORY_PREFIX))
        .take(MAX_LIST_ITEMS)
        .collect();

    if stories.is_empty() {
        fallback_list(FALLBACK_USER_STORIES)
    } else {
        stories
    }
}

fn extract_bullets(raw: &str, heading_re: &Regex, fallback: &[&str]) -> Vec<String> {
    let items: Vec<String> = section_block(raw, heading_re, SECTION_SEPARATOR)
        .map(bullet_lines)
        .unwrap_or_default()
        .into_iter()
        .take(MAX_LIST_ITEMS)
        .collect();

    if items.is_empty() {
        fallback_list(fallback)
    } else {
        items
    }
}

fn extract_timeline(raw: &str) -> String {
    section_block(raw, &TIMELINE, SECTION_SEPARATOR)
        .map(|block| block.trim())
        .filter(|block| !block.is_empty())
        .map(|block| block.to_string())
        .unwrap_or_else(|| FALLBACK_TIMELINE.to_string())
}

fn fallback_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPLY: &str = "## 📋 PRD Document\nOverview of the feature, the problem it solves, and the proposed solution.\n\n---\n\n## 👤 User Stories\n- As a tester, I want coverage so that bugs are caught\n- As a user, I want speed so that I save time\n\n---\n\n## 📊 Success Metrics\n- Metric 1: 30% adoption in the first quarter\n- Metric 2: NPS above 40\n\n---\n\n## ⏱️ Timeline\n3-5 weeks\n\n---\n\n## ⚠️ Risks\n- Risk 1: Scope creep → Mitigation: phased rollout\n- Risk 2: Low adoption → Mitigation: beta program\n";

    #[test]
    fn test_full_reply_assembles_every_field() {
        let response = assemble_prd_response(FULL_REPLY);
        assert_eq!(response.prd_document, FULL_REPLY);
        assert_eq!(
            response.user_stories,
            vec![
                "As a tester, I want coverage so that bugs are caught",
                "As a user, I want speed so that I save time"
            ]
        );
        assert_eq!(
            response.success_metrics,
            vec![
                "Metric 1: 30% adoption in the first quarter",
                "Metric 2: NPS above 40"
            ]
        );
        assert_eq!(response.timeline, "3-5 weeks");
        assert_eq!(
            response.risks,
            vec![
                "Risk 1: Scope creep → Mitigation: phased rollout",
                "Risk 2: Low adoption → Mitigation: beta program"
            ]
        );
    }

    #[test]
    fn test_user_stories_extracted_verbatim() {
        let raw = "## 👤 User Stories\n- As a tester, I want coverage so that bugs are caught\n- As a user, I want speed so that I save time\n## 📊 Success Metrics\n- Metric 1: adoption\n";
        let response = assemble_prd_response(raw);
        assert_eq!(
            response.user_stories,
            vec![
                "As a tester, I want coverage so that bugs are caught",
                "As a user, I want speed so that I save time"
            ]
        );
    }

    #[test]
    fn test_non_story_bullets_are_dropped() {
        let raw = "## 👤 User Stories\n- As a tester, I want coverage so that bugs are caught\n- Ship it fast\n- As an admin, I want control so that risk drops\n";
        let response = assemble_prd_response(raw);
        assert_eq!(
            response.user_stories,
            vec![
                "As a tester, I want coverage so that bugs are caught",
                "As an admin, I want control so that risk drops"
            ]
        );
    }

    #[test]
    fn test_lists_cap_at_five_items() {
        let stories: String = (1..=8)
            .map(|i| format!("- As a user, I want feature {i} so that value {i}\n"))
            .collect();
        let response = assemble_prd_response(&format!("## 👤 User Stories\n{stories}"));
        assert_eq!(response.user_stories.len(), 5);
        assert_eq!(
            response.user_stories[4],
            "As a user, I want feature 5 so that value 5"
        );

        let metrics: String = (1..=7).map(|i| format!("- Metric {i}: target\n")).collect();
        let response = assemble_prd_response(&format!("## 📊 Success Metrics\n{metrics}"));
        assert_eq!(response.success_metrics.len(), 5);

        let risks: String = (1..=6).map(|i| format!("- Risk {i}\n")).collect();
        let response = assemble_prd_response(&format!("## ⚠️ Risks\n{risks}"));
        assert_eq!(response.risks.len(), 5);
    }

    #[test]
    fn test_unstructured_reply_falls_back_everywhere() {
        let raw = "The model ignored the requested structure entirely.";
        let response = assemble_prd_response(raw);
        assert_eq!(response.prd_document, raw);
        assert_eq!(
            response.user_stories,
            vec!["As a user, I want this feature so I can achieve my goals"]
        );
        assert_eq!(
            response.success_metrics,
            vec!["Adoption rate", "User engagement", "Time saved"]
        );
        assert_eq!(response.timeline, "2-4 weeks");
        assert_eq!(
            response.risks,
            vec!["Technical complexity", "User adoption", "Timeline risk"]
        );
    }

    #[test]
    fn test_stories_without_story_shape_fall_back() {
        let raw = "## 👤 User Stories\n- Ship the thing\n- Make it fast\n";
        let response = assemble_prd_response(raw);
        assert_eq!(
            response.user_stories,
            vec!["As a user, I want this feature so I can achieve my goals"]
        );
    }

    #[test]
    fn test_timeline_trimmed_verbatim() {
        let raw = "## ⏱️ Timeline\n  6 weeks total:\nweeks 1-2 discovery, weeks 3-6 build.\n\n## ⚠️ Risks\n- One\n";
        let response = assemble_prd_response(raw);
        assert_eq!(
            response.timeline,
            "6 weeks total:\nweeks 1-2 discovery, weeks 3-6 build."
        );
    }

    #[test]
    fn test_blank_timeline_section_falls_back() {
        let raw = "## ⏱️ Timeline\n\n## ⚠️ Risks\n- Something\n";
        let response = assemble_prd_response(raw);
        assert_eq!(response.timeline, "2-4 weeks");
    }

    #[test]
    fn test_separator_ends_story_section() {
        let raw = "## 👤 User Stories\n- As a user, I want one thing so that done\n---\n- As a user, I want another so that more\n";
        let response = assemble_prd_response(raw);
        assert_eq!(
            response.user_stories,
            vec!["As a user, I want one thing so that done"]
        );
    }
}
