pub mod handlers;
pub mod seeder;
pub mod service;
pub mod source;
pub mod templates;
