//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Question, QuestionKey, NewQuestion, QuestionPatch)
//! - Domain value objects (Platform, Difficulty, Pagination, QuestionFilter)
//! - Domain services (field validation, LIKE escaping)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
