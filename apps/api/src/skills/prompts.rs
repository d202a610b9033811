// Skill extraction LLM prompt templates.

pub const SKILL_EXTRACTION_SYSTEM: &str = "\
You are an experienced technical recruiter who identifies technical and professional skills in text. \
Reply with a single comma-separated list of skills and nothing else: \
no numbering, no headings, no explanations, no markdown.";

pub const SKILL_EXTRACTION_PROMPT: &str = "\
List the relevant skills found in this {context}. \
Include programming languages, frameworks, tools, platforms and professional competencies.

TEXT:
{text}";
