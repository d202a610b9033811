pub mod handlers;
pub mod prompts;
pub mod scorer;
pub mod service;
