//! Application Layer
//!
//! Use cases for the question catalog.

pub mod config;
pub mod create_question;
pub mod dashboard;
pub mod delete_question;
pub mod get_question;
pub mod list_questions;
pub mod update_question;

// Re-exports
pub use config::QuestionConfig;
pub use create_question::CreateQuestionUseCase;
pub use dashboard::DashboardUseCase;
pub use delete_question::DeleteQuestionUseCase;
pub use get_question::GetQuestionUseCase;
pub use list_questions::{ListQuestionsOutput, ListQuestionsUseCase};
pub use update_question::UpdateQuestionUseCase;
