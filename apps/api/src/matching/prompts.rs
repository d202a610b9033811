// Match explanation LLM prompt templates.

pub const MATCH_EXPLANATION_SYSTEM: &str = "\
You are a career counselor explaining how well a candidate fits a job. \
Be concise and concrete: answer in 2-3 plain sentences, no lists, no markdown.";

pub const MATCH_EXPLANATION_PROMPT: &str = "\
Explain why this candidate is a {score}% match for the position.

MATCH SCORE: {score}%
MATCHING SKILLS: {matching}
MISSING SKILLS: {missing}

JOB (excerpt):
{job_excerpt}

RESUME (excerpt):
{resume_excerpt}";
