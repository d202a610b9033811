//! Match scoring: résumé skills vs job skills, plus an LLM-written explanation.
//!
//! Algorithm:
//! 1. A job skill matches when any résumé skill equals it or contains it, or
//!    is contained by it, ignoring case. Deliberately permissive: "React"
//!    matches "React.js" and "React Native".
//! 2. score = distinct matching job skills / job skill count × 100, one
//!    decimal; 0 when the job has no skills. Extraction already drops
//!    repeats, so the count is normally the distinct count too.
//! 3. Ask the LLM for a 2-3 sentence explanation.
//!
//! Never fails: any error yields the degraded result (score 0, nothing
//! matching, every job skill missing, fixed explanation).

use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use crate::llm_client::LlmProvider;
use crate::matching::prompts::{MATCH_EXPLANATION_PROMPT, MATCH_EXPLANATION_SYSTEM};
use crate::text::truncate_chars;

pub const FALLBACK_EXPLANATION: &str = "Unable to generate match analysis at this time.";

/// Characters of each source text quoted in the explanation prompt.
const EXCERPT_CHARS: usize = 500;

/// Scored outcome for one résumé/job pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub match_score: f64, // 0.0 – 100.0, one decimal
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub result: MatchResult,
    /// True when `result` is the fallback produced after a failure.
    pub degraded: bool,
}

/// Inputs to one scoring call.
#[derive(Debug, Clone, Copy)]
pub struct MatchInput<'a> {
    pub resume_skills: &'a [String],
    pub job_skills: &'a [String],
    pub resume_text: &'a str,
    pub job_text: &'a str,
}

/// Job skills split by whether the résumé covers them. Both lists are
/// deduplicated case-insensitively; disjoint, and together exactly the
/// distinct job skills.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillPartition {
    pub matching: Vec<String>,
    pub missing: Vec<String>,
    /// Length of the job skill list as given, repeats included.
    pub job_skill_count: usize,
}

impl SkillPartition {
    pub fn score(&self) -> f64 {
        if self.job_skill_count == 0 {
            return 0.0;
        }
        round_one_decimal(self.matching.len() as f64 / self.job_skill_count as f64 * 100.0)
    }
}

pub async fn score_match(llm: &dyn LlmProvider, input: MatchInput<'_>) -> MatchOutcome {
    let partition = partition_skills(input.resume_skills, input.job_skills);
    let match_score = partition.score();

    let prompt = build_explanation_prompt(match_score, &partition, input);
    match llm.complete(&prompt, MATCH_EXPLANATION_SYSTEM).await {
        Ok(explanation) => MatchOutcome {
            result: MatchResult {
                match_score,
                matching_skills: partition.matching,
                missing_skills: partition.missing,
                explanation: explanation.trim().to_string(),
            },
            degraded: false,
        },
        Err(e) => {
            warn!("Match explanation failed, returning fallback result: {e}");
            degraded_outcome(input.job_skills)
        }
    }
}

/// Fallback for a failed scoring attempt.
pub fn degraded_outcome(job_skills: &[String]) -> MatchOutcome {
    MatchOutcome {
        result: MatchResult {
            match_score: 0.0,
            matching_skills: Vec::new(),
            missing_skills: job_skills.to_vec(),
            explanation: FALLBACK_EXPLANATION.to_string(),
        },
        degraded: true,
    }
}

pub fn skills_match(job_skill: &str, resume_skill: &str) -> bool {
    let job = job_skill.to_lowercase();
    let resume = resume_skill.to_lowercase();
    job == resume || job.contains(&resume) || resume.contains(&job)
}

pub fn partition_skills(resume_skills: &[String], job_skills: &[String]) -> SkillPartition {
    let mut partition = SkillPartition {
        job_skill_count: job_skills.len(),
        ..SkillPartition::default()
    };
    for job_skill in distinct_skills(job_skills) {
        if resume_skills.iter().any(|r| skills_match(&job_skill, r)) {
            partition.matching.push(job_skill);
        } else {
            partition.missing.push(job_skill);
        }
    }
    partition
}

/// Case-insensitive dedup keeping the first spelling and order.
fn distinct_skills(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(|s| seen.insert(s.to_lowercase()))
        .cloned()
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    ((value * 10.0).round() / 10.0).clamp(0.0, 100.0)
}

fn build_explanation_prompt(score: f64, partition: &SkillPartition, input: MatchInput<'_>) -> String {
    MATCH_EXPLANATION_PROMPT
        .replace("{score}", &format!("{score:.1}"))
        .replace("{matching}", &join_or_none(&partition.matching))
        .replace("{missing}", &join_or_none(&partition.missing))
        .replace("{job_excerpt}", truncate_chars(input.job_text.trim(), EXCERPT_CHARS))
        .replace(
            "{resume_excerpt}",
            truncate_chars(input.resume_text.trim(), EXCERPT_CHARS),
        )
}

fn join_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        "none".to_string()
    } else {
        skills.join(", ")
    }
}
