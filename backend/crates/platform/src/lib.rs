//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Bearer token extraction from request headers
//! - Environment configuration helpers

pub mod bearer;
pub mod config;
pub mod password;
