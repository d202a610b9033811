//! Skill extraction: turns free text into a normalized skill list via the LLM.
//!
//! Never fails: provider errors yield an empty, `degraded` extraction. An
//! empty list is therefore not evidence that the text has no skills.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::llm_client::{strip_code_fences, LlmProvider};
use crate::skills::prompts::{SKILL_EXTRACTION_PROMPT, SKILL_EXTRACTION_SYSTEM};
use crate::text::{title_case, truncate_chars};

/// Characters of input text sent to the model.
pub const MAX_INPUT_CHARS: usize = 2000;
/// Skills kept per extraction, in reply order.
pub const MAX_SKILLS: usize = 20;

const STOP_WORDS: [&str; 8] = ["and", "or", "the", "with", "for", "in", "on", "at"];

/// What kind of document the text came from; shown to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillContext {
    JobDescription,
    Resume,
}

impl SkillContext {
    pub fn label(self) -> &'static str {
        match self {
            SkillContext::JobDescription => "job description",
            SkillContext::Resume => "resume",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillExtraction {
    pub skills: Vec<String>,
    /// True when the model call failed and `skills` is a stand-in.
    pub degraded: bool,
}

impl SkillExtraction {
    fn fallback() -> Self {
        Self {
            skills: Vec::new(),
            degraded: true,
        }
    }
}

pub async fn extract_skills(
    llm: &dyn LlmProvider,
    text: &str,
    context: SkillContext,
) -> SkillExtraction {
    let prompt = SKILL_EXTRACTION_PROMPT
        .replace("{context}", context.label())
        .replace("{text}", truncate_chars(text, MAX_INPUT_CHARS));

    match llm.complete(&prompt, SKILL_EXTRACTION_SYSTEM).await {
        Ok(reply) => {
            let skills = parse_skill_list(&reply);
            debug!("Extracted {} skills from {}", skills.len(), context.label());
            SkillExtraction {
                skills,
                degraded: false,
            }
        }
        Err(e) => {
            warn!("Skill extraction from {} failed: {e}", context.label());
            SkillExtraction::fallback()
        }
    }
}

/// Parses a comma-separated model reply into at most `MAX_SKILLS` title-cased
/// skills, dropping blanks, single characters, stop-words and case-insensitive
/// repeats (first spelling wins).
pub fn parse_skill_list(reply: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    strip_code_fences(reply)
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(title_case)
        .filter(|skill| skill.chars().count() > 1 && !is_stop_word(skill))
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .take(MAX_SKILLS)
        .collect()
}

fn is_stop_word(skill: &str) -> bool {
    let lower = skill.to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubLlm;

    #[test]
    fn test_parse_trims_and_title_cases() {
        let skills = parse_skill_list(" python ,  REACT, aws ");
        assert_eq!(skills, vec!["Python", "React", "Aws"]);
    }

    #[test]
    fn test_parse_drops_empty_short_and_stop_words() {
        let skills = parse_skill_list("Rust,, ,C,R,and,The,With,Go,FOR");
        assert_eq!(skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_parse_caps_at_twenty_in_order() {
        let reply = (0..30)
            .map(|i| format!("skill{i}"))
            .collect::<Vec<_>>()
            .join(",");
        let skills = parse_skill_list(&reply);
        assert_eq!(skills.len(), MAX_SKILLS);
        assert_eq!(skills[0], "Skill0");
        assert_eq!(skills[19], "Skill19");
    }

    #[test]
    fn test_parse_strips_code_fence() {
        let skills = parse_skill_list("```\nDocker, Kubernetes\n```");
        assert_eq!(skills, vec!["Docker", "Kubernetes"]);
    }

    #[test]
    fn test_parsed_output_properties() {
        let reply = "a, in, On, SQL, sql, x, terraform, at, OR, machine learning";
        let skills = parse_skill_list(reply);
        assert!(skills.len() <= MAX_SKILLS);
        for skill in &skills {
            assert!(skill.chars().count() > 1, "{skill} too short");
            assert!(!STOP_WORDS.contains(&skill.to_lowercase().as_str()));
        }
        assert_eq!(skills, vec!["Sql", "Terraform", "Machine Learning"]);
    }

    #[test]
    fn test_parse_drops_case_insensitive_repeats() {
        assert_eq!(parse_skill_list("SQL, sql, Go"), vec!["Sql", "Go"]);
    }

    #[test]
    fn test_parse_repeats_do_not_use_up_the_cap() {
        let mut tokens = vec!["Rust".to_string(); 25];
        tokens.extend((0..MAX_SKILLS).map(|i| format!("skill{i}")));
        let skills = parse_skill_list(&tokens.join(","));
        assert_eq!(skills.len(), MAX_SKILLS);
        assert_eq!(skills[0], "Rust");
        assert_eq!(skills[19], "Skill18");
    }

    #[tokio::test]
    async fn test_extract_skills_uses_context_and_truncates_input() {
        let llm = StubLlm::replying("Python, Django");
        let text = "é".repeat(MAX_INPUT_CHARS + 500);

        let extraction = extract_skills(&llm, &text, SkillContext::Resume).await;

        assert_eq!(extraction.skills, vec!["Python", "Django"]);
        assert!(!extraction.degraded);
        let prompt = &llm.prompts()[0];
        assert!(prompt.contains("this resume"));
        assert_eq!(prompt.chars().filter(|c| *c == 'é').count(), MAX_INPUT_CHARS);
    }

    #[tokio::test]
    async fn test_extract_skills_provider_failure_returns_empty() {
        let llm = StubLlm::failing();
        let extraction = extract_skills(&llm, "Senior Rust engineer", SkillContext::JobDescription).await;
        assert!(extraction.skills.is_empty());
        assert!(extraction.degraded);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_extract_skills_empty_reply_is_not_degraded() {
        let llm = StubLlm::replying("");
        let extraction = extract_skills(&llm, "text", SkillContext::JobDescription).await;
        assert!(extraction.skills.is_empty());
        assert!(!extraction.degraded);
    }
}
