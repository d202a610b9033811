pub mod extraction;
pub mod prompts;
