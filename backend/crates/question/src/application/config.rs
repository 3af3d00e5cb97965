//! Application Configuration
//!
//! Configuration for the question application layer.

/// Question application configuration
#[derive(Debug, Clone)]
pub struct QuestionConfig {
    /// Entries in the category and company top lists
    pub dashboard_top_n: i64,
    /// Entries in the recent-questions list
    pub dashboard_recent: i64,
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            dashboard_top_n: 10,
            dashboard_recent: 10,
        }
    }
}
